//! # Scoped Default
//!
//! Scoped, thread-local default instances for arbitrary Rust types.
//!
//! `scoped_default` gives a type a "current default instance": an ambient
//! value — a graph under construction, a connection, a session — that callers
//! can reach without it being threaded through every signature. Overrides are
//! pushed for a lexical scope, nest to arbitrary depth, restore LIFO, and are
//! invisible to every other thread.
//!
//! ## Core Concepts
//!
//! - **Override Stack**: each thread owns an independent LIFO sequence of
//!   overrides per registry; the innermost open override is the active one.
//! - **Guard**: pushing returns a [`DefaultGuard`] that pops again when it
//!   drops — on normal exit, early return, and unwind alike.
//! - **Fallback factory**: an optional producer consulted whenever a thread
//!   has no override open; invoked on every call, never memoized.
//! - **Augmentation**: the [`scoped_default!`] macro implements
//!   [`HasDefault`] for a type, backing it with one process-lifetime
//!   [`ScopedDefault`] registry.
//!
//! ## Quick Start
//!
//! ```
//! use scoped_default::{scoped_default, HasDefault};
//! use std::sync::Arc;
//!
//! struct Session {
//!   user: String,
//! }
//!
//! scoped_default!(Session);
//!
//! fn current_user() -> Option<String> {
//!   Session::get_default().map(|session| session.user.clone())
//! }
//!
//! fn main() {
//!   assert_eq!(current_user(), None);
//!
//!   let admin = Arc::new(Session { user: "admin".into() });
//!   {
//!     let _scope = admin.clone().as_default();
//!     assert_eq!(current_user().as_deref(), Some("admin"));
//!
//!     let _inner = Session::set_default(Session { user: "guest".into() });
//!     assert_eq!(current_user().as_deref(), Some("guest"));
//!   }
//!   assert_eq!(current_user(), None);
//! }
//! ```

mod core;
mod error;
mod guard;
mod has_default;
mod macros;
mod scope;
mod stack;

pub use error::EmptyStackError;
pub use guard::DefaultGuard;
pub use has_default::HasDefault;
pub use scope::{FallbackFactory, ScopedDefault, ScopedDefaultBuilder};
pub use stack::OverrideStack;

// Support for the `scoped_default!` expansion; not public API.
#[doc(hidden)]
pub mod __private {
  pub use once_cell::sync::Lazy;
}
