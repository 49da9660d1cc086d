use scoped_default::{scoped_default, HasDefault};

#[derive(Debug)]
struct Config {
  verbosity: u8,
}

scoped_default!(Config, factory = || Config { verbosity: 1 });

fn main() {
  // With nothing pushed, every lookup asks the factory for a fresh value.
  let fallback = Config::get_default().unwrap();
  println!("fallback verbosity: {}", fallback.verbosity);
  assert_eq!(fallback.verbosity, 1);

  {
    let _scope = Config::set_default(Config { verbosity: 3 });
    let overridden = Config::get_default().unwrap();
    println!("override verbosity: {}", overridden.verbosity);
    assert_eq!(overridden.verbosity, 3);
  }

  let restored = Config::get_default().unwrap();
  println!("restored verbosity: {}", restored.verbosity);
  assert_eq!(restored.verbosity, 1);
}
