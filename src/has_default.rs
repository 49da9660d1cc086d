//! The external-facing trait an augmented type exposes.

use crate::guard::DefaultGuard;
use crate::scope::ScopedDefault;
use std::sync::Arc;

/// Gives a type the four default-instance operations, backed by one
/// process-lifetime [`ScopedDefault`] registry.
///
/// Implementations are normally generated by
/// [`scoped_default!`](crate::scoped_default); only
/// [`default_scope`](Self::default_scope) is required.
///
/// ```
/// use scoped_default::{scoped_default, HasDefault};
///
/// struct Session {
///   user: String,
/// }
///
/// scoped_default!(Session);
///
/// fn main() {
///   assert!(Session::get_default().is_none());
///
///   let scope = Session::set_default(Session { user: "admin".into() });
///   assert_eq!(Session::get_default().unwrap().user, "admin");
///
///   drop(scope);
///   assert!(Session::get_default().is_none());
/// }
/// ```
pub trait HasDefault: Sized + 'static {
  /// The registry bound to this type at augmentation time.
  fn default_scope() -> &'static ScopedDefault<Self>;

  /// Pushes this instance as the calling thread's default until the returned
  /// guard drops. Consumes one `Arc` handle; clone first to keep one.
  fn as_default(self: Arc<Self>) -> DefaultGuard<Self> {
    Self::default_scope().set_default_arc(self)
  }

  /// The current default in the calling thread: the innermost open override,
  /// else the fallback factory's product, else `None`.
  fn get_default() -> Option<Arc<Self>> {
    Self::default_scope().get_default()
  }

  /// Pushes `instance` as the calling thread's default until the returned
  /// guard drops.
  fn set_default(instance: Self) -> DefaultGuard<Self> {
    Self::default_scope().set_default(instance)
  }

  /// Clears the calling thread's overrides for this type. The fallback
  /// factory is untouched.
  fn reset_stack() {
    Self::default_scope().reset_stack()
  }
}
