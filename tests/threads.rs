use scoped_default::ScopedDefault;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

// --- Test Fixtures ---

#[derive(Debug, PartialEq, Eq)]
struct Tag {
  name: &'static str,
}

// --- Context Isolation ---

#[test]
fn test_overrides_are_invisible_across_threads() {
  let scope = ScopedDefault::<Tag>::new();

  let _outer = scope.set_default(Tag { name: "main" });
  assert_eq!(scope.get_default().unwrap().name, "main");

  thread::scope(|s| {
    s.spawn(|| {
      // This thread never pushed, so it sees no default at all.
      assert!(scope.get_default().is_none());

      let _inner = scope.set_default(Tag { name: "worker" });
      assert_eq!(scope.get_default().unwrap().name, "worker");
    });
  });

  // The worker's override never leaked back.
  assert_eq!(scope.get_default().unwrap().name, "main");
}

#[test]
fn test_spawned_thread_falls_back_to_factory() {
  let scope = ScopedDefault::with_factory(|| Tag { name: "fallback" });

  let _outer = scope.set_default(Tag { name: "main" });

  thread::scope(|s| {
    s.spawn(|| {
      // No override in this thread: resolution falls through to the factory,
      // not to the parent thread's override.
      assert_eq!(scope.get_default().unwrap().name, "fallback");
    });
  });

  assert_eq!(scope.get_default().unwrap().name, "main");
}

#[test]
fn test_reset_only_clears_the_calling_thread() {
  let scope = ScopedDefault::<Tag>::new();

  let _outer = scope.set_default(Tag { name: "main" });

  thread::scope(|s| {
    s.spawn(|| {
      scope.reset_stack();
      assert!(scope.get_default().is_none());
    });
  });

  assert_eq!(scope.get_default().unwrap().name, "main");
}

#[test]
fn test_factory_produces_per_call_under_concurrency() {
  static FACTORY_EXECUTION_COUNT: AtomicUsize = AtomicUsize::new(0);

  struct Stamp {
    serial: usize,
  }

  let scope = ScopedDefault::with_factory(|| Stamp {
    serial: FACTORY_EXECUTION_COUNT.fetch_add(1, Ordering::SeqCst),
  });

  thread::scope(|s| {
    for _ in 0..8 {
      s.spawn(|| {
        let first = scope.get_default().unwrap();
        let second = scope.get_default().unwrap();
        // Every resolution is a fresh product; nothing is cached or shared.
        assert!(!Arc::ptr_eq(&first, &second));
        assert_ne!(first.serial, second.serial);
      });
    }
  });

  assert_eq!(FACTORY_EXECUTION_COUNT.load(Ordering::SeqCst), 16);
}
