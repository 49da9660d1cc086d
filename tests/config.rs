use scoped_default::{scoped_default, HasDefault, ScopedDefault};
use serial_test::serial;
use std::sync::Mutex;

// --- Capturing Logger Fixture ---

struct CaptureLog {
  warnings: Mutex<Vec<String>>,
}

static LOG: CaptureLog = CaptureLog {
  warnings: Mutex::new(Vec::new()),
};

impl log::Log for CaptureLog {
  fn enabled(&self, metadata: &log::Metadata) -> bool {
    metadata.level() <= log::Level::Warn
  }

  fn log(&self, record: &log::Record) {
    if record.level() == log::Level::Warn {
      self.warnings.lock().unwrap().push(record.args().to_string());
    }
  }

  fn flush(&self) {}
}

// --- Test Fixtures ---

struct Conflicted {
  source: &'static str,
}

impl Default for Conflicted {
  fn default() -> Self {
    Self { source: "empty_init" }
  }
}

scoped_default!(Conflicted, use_empty_init, factory = || Conflicted {
  source: "factory",
});

// --- Configuration Conflict ---

#[test]
#[serial]
fn test_conflicting_configuration_warns_once_and_prefers_empty_init() {
  log::set_logger(&LOG).expect("no other logger installed");
  log::set_max_level(log::LevelFilter::Warn);

  let before = LOG.warnings.lock().unwrap().len();

  // The first use builds the registry; the conflict is reported exactly once
  // and `use_empty_init` wins.
  assert_eq!(Conflicted::get_default().unwrap().source, "empty_init");
  assert_eq!(Conflicted::get_default().unwrap().source, "empty_init");

  let warnings = LOG.warnings.lock().unwrap();
  assert_eq!(warnings.len(), before + 1);
  assert!(warnings[before].contains("use_empty_init"));
}

#[test]
#[serial]
fn test_builder_conflict_prefers_empty_init() {
  let scope = ScopedDefault::<Conflicted>::builder()
    .use_empty_init()
    .factory(|| Conflicted { source: "factory" })
    .build();

  assert_eq!(scope.get_default().unwrap().source, "empty_init");
}
