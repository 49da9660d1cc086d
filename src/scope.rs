//! The `ScopedDefault` registry: one override stack plus one optional
//! fallback factory per augmented type.

use crate::guard::DefaultGuard;
use crate::stack::OverrideStack;
use std::fmt;
use std::sync::Arc;

/// Process-wide fallback producer for a type's default instance.
///
/// Bound once when the registry is built and read-only afterwards; callable
/// concurrently from any number of threads. This crate makes no guarantee
/// about the factory's re-entrancy or idempotence beyond what its author
/// provides.
pub type FallbackFactory<T> = Box<dyn Fn() -> T + Send + Sync>;

/// The registry binding one [`OverrideStack`] and one optional
/// [`FallbackFactory`] to a type.
///
/// Usually constructed once per type, as a `'static`, by the
/// [`scoped_default!`](crate::scoped_default) macro. Standalone registries
/// work too and are independent of each other even for the same `T`.
pub struct ScopedDefault<T: 'static> {
  stack: OverrideStack<T>,
  factory: Option<FallbackFactory<T>>,
}

impl<T: 'static> ScopedDefault<T> {
  /// A registry with no fallback: the default is absent until an override is
  /// pushed.
  pub fn new() -> Self {
    Self {
      stack: OverrideStack::new(),
      factory: None,
    }
  }

  /// A registry whose fallback is an explicit producer.
  pub fn with_factory(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
    Self {
      stack: OverrideStack::new(),
      factory: Some(Box::new(factory)),
    }
  }

  /// Starts augmentation-time configuration.
  pub fn builder() -> ScopedDefaultBuilder<T> {
    ScopedDefaultBuilder {
      empty_init: None,
      factory: None,
    }
  }

  /// The current default in the calling thread.
  ///
  /// The innermost open override wins. With none open, the fallback factory
  /// is invoked — on every call, never memoized, a fresh `Arc` each time.
  /// With no factory either, the default is absent. A panic raised by the
  /// factory propagates unmodified.
  pub fn get_default(&self) -> Option<Arc<T>> {
    resolve_default(&self.stack, self.factory.as_deref())
  }

  /// Pushes `instance` as the calling thread's default for the lifetime of
  /// the returned guard.
  pub fn set_default(&self, instance: T) -> DefaultGuard<T> {
    self.set_default_arc(Arc::new(instance))
  }

  /// Pushes an already-shared handle as the calling thread's default.
  pub fn set_default_arc(&self, instance: Arc<T>) -> DefaultGuard<T> {
    self.stack.push_scoped(instance)
  }

  /// Clears the calling thread's overrides. The fallback factory stays
  /// bound.
  pub fn reset_stack(&self) {
    self.stack.reset();
  }

  /// The stack backing this registry.
  pub fn stack(&self) -> &OverrideStack<T> {
    &self.stack
  }
}

impl<T: 'static> Default for ScopedDefault<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: 'static> fmt::Debug for ScopedDefault<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ScopedDefault")
      .field("stack", &self.stack)
      .field("has_factory", &self.factory.is_some())
      .finish()
  }
}

/// Resolution order: innermost open override, else the factory's product,
/// else absent.
fn resolve_default<T: 'static>(
  stack: &OverrideStack<T>,
  factory: Option<&(dyn Fn() -> T + Send + Sync)>,
) -> Option<Arc<T>> {
  if let Some(active) = stack.peek() {
    return Some(active);
  }
  factory.map(|build| Arc::new(build()))
}

/// Augmentation-time configuration for a [`ScopedDefault`].
///
/// `use_empty_init` and `factory` are mutually exclusive. If both are set,
/// [`build`](Self::build) emits one warning and `use_empty_init` wins.
pub struct ScopedDefaultBuilder<T: 'static> {
  empty_init: Option<FallbackFactory<T>>,
  factory: Option<FallbackFactory<T>>,
}

impl<T: 'static> ScopedDefaultBuilder<T> {
  /// Uses `T::default()` as the fallback producer.
  pub fn use_empty_init(mut self) -> Self
  where
    T: Default,
  {
    self.empty_init = Some(Box::new(T::default));
    self
  }

  /// Uses an explicit fallback producer.
  pub fn factory(mut self, factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
    self.factory = Some(Box::new(factory));
    self
  }

  /// Finishes configuration and creates the registry.
  pub fn build(self) -> ScopedDefault<T> {
    let factory = match (self.empty_init, self.factory) {
      (Some(empty_init), Some(_)) => {
        log::warn!(
          "either factory or use_empty_init should be set, not both; assuming use_empty_init"
        );
        Some(empty_init)
      }
      (Some(empty_init), None) => Some(empty_init),
      (None, factory) => factory,
    };
    ScopedDefault {
      stack: OverrideStack::new(),
      factory,
    }
  }
}
