//! RAII release for pushed overrides.

use crate::core::{self, StackId};
use crate::stack::OverrideStack;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// An open override: the token returned by every push-style operation.
///
/// When created, the guard pushes a value onto the calling thread's sequence.
/// When dropped, it pops that value again — on normal scope exit, early
/// return, and unwind alike — restoring whatever was active before entry.
/// Guards nest LIFO; block scoping releases them in the right order for free,
/// and releases must stay in reverse entry order when guards are held by
/// hand.
///
/// The guard is not `Send`: it must release on the thread that pushed.
#[must_use = "the default is only overridden while the guard is alive"]
pub struct DefaultGuard<T: 'static> {
  id: StackId,
  _not_send: PhantomData<*const ()>,
  _marker: PhantomData<fn(T) -> T>,
}

impl<T: 'static> DefaultGuard<T> {
  /// Pushes `value` on `stack` and binds the matching pop to the returned
  /// guard's lifetime.
  pub fn enter(stack: &OverrideStack<T>, value: Arc<T>) -> Self {
    stack.push(value);
    Self {
      id: stack.id(),
      _not_send: PhantomData,
      _marker: PhantomData,
    }
  }
}

impl<T: 'static> Drop for DefaultGuard<T> {
  fn drop(&mut self) {
    // The pop must find the entry this guard pushed; its absence means the
    // sequence was reset (or popped by hand) while the guard was alive.
    if core::pop_entry_erased(self.id).is_none() {
      if std::thread::panicking() {
        log::error!(
          "override guard released against an already-cleared stack; \
           the previous default was not restored"
        );
      } else {
        panic!("override guard released against an already-cleared stack");
      }
    }
  }
}

impl<T: 'static> fmt::Debug for DefaultGuard<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DefaultGuard").field("id", &self.id).finish()
  }
}
