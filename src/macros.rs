//! Public macros for augmenting a type with a scoped default.

/// Implements [`HasDefault`](crate::HasDefault) for a type, binding it to a
/// process-lifetime registry.
///
/// Configuration mirrors [`ScopedDefaultBuilder`](crate::ScopedDefaultBuilder)
/// and is applied exactly once, on the first use of the type's default:
///
/// - `scoped_default!(MyType)` — no fallback; the default is absent until an
///   override is pushed.
/// - `scoped_default!(MyType, use_empty_init)` — fall back to
///   `MyType::default()` (requires `MyType: Default`).
/// - `scoped_default!(MyType, factory = expr)` — fall back to an explicit
///   zero-argument producer.
/// - `scoped_default!(MyType, use_empty_init, factory = expr)` — conflicting
///   configuration; warns once and behaves as `use_empty_init`.
///
/// # Examples
///
/// ```
/// use scoped_default::{scoped_default, HasDefault};
///
/// struct Graph {
///   name: &'static str,
/// }
///
/// scoped_default!(Graph, factory = || Graph { name: "root" });
///
/// fn main() {
///   assert_eq!(Graph::get_default().unwrap().name, "root");
///
///   {
///     let _scope = Graph::set_default(Graph { name: "scratch" });
///     assert_eq!(Graph::get_default().unwrap().name, "scratch");
///   }
///   assert_eq!(Graph::get_default().unwrap().name, "root");
/// }
/// ```
#[macro_export]
macro_rules! scoped_default {
  // Arm for a type with no fallback: scoped_default!(MyType)
  ($ty:ty) => {
    impl $crate::HasDefault for $ty {
      fn default_scope() -> &'static $crate::ScopedDefault<$ty> {
        static SCOPE: $crate::__private::Lazy<$crate::ScopedDefault<$ty>> =
          $crate::__private::Lazy::new($crate::ScopedDefault::new);
        &SCOPE
      }
    }
  };

  // Arm for `T::default()` as the fallback: scoped_default!(MyType, use_empty_init)
  ($ty:ty, use_empty_init) => {
    impl $crate::HasDefault for $ty {
      fn default_scope() -> &'static $crate::ScopedDefault<$ty> {
        static SCOPE: $crate::__private::Lazy<$crate::ScopedDefault<$ty>> =
          $crate::__private::Lazy::new(|| {
            $crate::ScopedDefault::builder().use_empty_init().build()
          });
        &SCOPE
      }
    }
  };

  // Arm for an explicit fallback producer: scoped_default!(MyType, factory = || …)
  ($ty:ty, factory = $factory:expr) => {
    impl $crate::HasDefault for $ty {
      fn default_scope() -> &'static $crate::ScopedDefault<$ty> {
        static SCOPE: $crate::__private::Lazy<$crate::ScopedDefault<$ty>> =
          $crate::__private::Lazy::new(|| {
            $crate::ScopedDefault::builder().factory($factory).build()
          });
        &SCOPE
      }
    }
  };

  // Conflicting configuration: warns once, `use_empty_init` wins.
  ($ty:ty, use_empty_init, factory = $factory:expr) => {
    impl $crate::HasDefault for $ty {
      fn default_scope() -> &'static $crate::ScopedDefault<$ty> {
        static SCOPE: $crate::__private::Lazy<$crate::ScopedDefault<$ty>> =
          $crate::__private::Lazy::new(|| {
            $crate::ScopedDefault::builder()
              .use_empty_init()
              .factory($factory)
              .build()
          });
        &SCOPE
      }
    }
  };
}
