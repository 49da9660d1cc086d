//! The typed override stack and its per-thread operations.

use crate::core::{self, StackId};
use crate::error::EmptyStackError;
use crate::guard::DefaultGuard;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A per-thread, LIFO stack of overrides for values of type `T`.
///
/// Every thread that pushes gets its own independent sequence, created lazily
/// on the first push in that thread; a thread never observes another thread's
/// overrides. The stack value itself is freely shareable across threads — it
/// is only an identity, and the sequences live in thread-local storage.
pub struct OverrideStack<T: 'static> {
  id: StackId,
  _marker: PhantomData<fn(T) -> T>,
}

impl<T: 'static> OverrideStack<T> {
  /// Creates a new stack with no pushed overrides in any thread.
  pub fn new() -> Self {
    Self {
      id: StackId::next(),
      _marker: PhantomData,
    }
  }

  pub(crate) fn id(&self) -> StackId {
    self.id
  }

  /// Pushes `value` onto the calling thread's sequence.
  ///
  /// Prefer [`push_scoped`](Self::push_scoped): a bare push has to be matched
  /// with a bare [`pop`](Self::pop) on every exit path by hand.
  pub fn push(&self, value: Arc<T>) {
    core::push_entry(self.id, value);
  }

  /// Removes and returns the most recently pushed override in the calling
  /// thread.
  pub fn pop(&self) -> Result<Arc<T>, EmptyStackError> {
    core::pop_entry(self.id).ok_or(EmptyStackError)
  }

  /// Returns the active override in the calling thread, if any. No side
  /// effects.
  pub fn peek(&self) -> Option<Arc<T>> {
    core::peek_entry(self.id)
  }

  /// Pushes `value` and returns a guard that pops it again when dropped.
  pub fn push_scoped(&self, value: Arc<T>) -> DefaultGuard<T> {
    DefaultGuard::enter(self, value)
  }

  /// Clears the calling thread's entire sequence, whatever its depth.
  ///
  /// Meant for test teardown. Calling this while guards from this thread are
  /// still alive breaks their release contract; each such guard flags the
  /// violation when it drops.
  pub fn reset(&self) {
    core::clear_entries(self.id);
  }

  /// Current nesting depth in the calling thread.
  pub fn depth(&self) -> usize {
    core::entry_count(self.id)
  }
}

impl<T: 'static> Default for OverrideStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: 'static> fmt::Debug for OverrideStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OverrideStack").field("id", &self.id).finish()
  }
}
