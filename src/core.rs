//! Core, non-public context plumbing for the override stacks.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

thread_local! {
  // This thread-local variable holds every override sequence owned by this
  // specific thread, keyed by the stack that pushed into it. This is the key
  // to context isolation: no other thread can reach this map.
  static CONTEXT_STACKS: RefCell<HashMap<StackId, Vec<Box<dyn Any>>>> =
    RefCell::new(HashMap::new());
}

/// Identity of one `OverrideStack` across every thread's local registry.
///
/// Allocated once at stack construction. Two stacks for the same `T` carry
/// distinct ids and never share sequences.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StackId(u64);

static NEXT_STACK_ID: AtomicU64 = AtomicU64::new(1);

impl StackId {
  pub(crate) fn next() -> Self {
    StackId(NEXT_STACK_ID.fetch_add(1, Ordering::Relaxed))
  }
}

impl fmt::Debug for StackId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "StackId({})", self.0)
  }
}

pub(crate) fn push_entry<T: 'static>(id: StackId, value: Arc<T>) {
  CONTEXT_STACKS.with(|stacks| {
    stacks
      .borrow_mut()
      .entry(id)
      .or_default()
      .push(Box::new(value));
  });
}

pub(crate) fn pop_entry<T: 'static>(id: StackId) -> Option<Arc<T>> {
  pop_entry_erased(id).map(|entry| {
    *entry
      .downcast::<Arc<T>>()
      .unwrap_or_else(|_| unreachable!("override stack entry of a foreign type"))
  })
}

// The guard's `Drop` releases through this erased form so it never needs to
// name `T`; dropping the box drops the pushed `Arc` handle.
pub(crate) fn pop_entry_erased(id: StackId) -> Option<Box<dyn Any>> {
  CONTEXT_STACKS.with(|stacks| {
    let mut stacks = stacks.borrow_mut();
    let sequence = stacks.get_mut(&id)?;
    let entry = sequence.pop();
    if sequence.is_empty() {
      stacks.remove(&id);
    }
    entry
  })
}

pub(crate) fn peek_entry<T: 'static>(id: StackId) -> Option<Arc<T>> {
  CONTEXT_STACKS.with(|stacks| {
    stacks
      .borrow()
      .get(&id)
      .and_then(|sequence| sequence.last())
      .and_then(|entry| entry.downcast_ref::<Arc<T>>())
      .cloned()
  })
}

pub(crate) fn clear_entries(id: StackId) {
  // Cleared entries are dropped after the borrow is released, in case a
  // value's own drop glue resolves defaults.
  let _cleared = CONTEXT_STACKS.with(|stacks| stacks.borrow_mut().remove(&id));
}

pub(crate) fn entry_count(id: StackId) -> usize {
  CONTEXT_STACKS.with(|stacks| stacks.borrow().get(&id).map(Vec::len).unwrap_or(0))
}
