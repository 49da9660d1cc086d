use scoped_default::{scoped_default, HasDefault};
use std::thread;

struct Session {
  user: &'static str,
}

scoped_default!(Session, factory = || Session { user: "anonymous" });

fn whoami() -> &'static str {
  Session::get_default().map(|session| session.user).unwrap_or("nobody")
}

fn main() {
  let _main_scope = Session::set_default(Session { user: "admin" });
  println!("main thread: {}", whoami());
  assert_eq!(whoami(), "admin");

  let handles: Vec<_> = ["alice", "bob"]
    .into_iter()
    .map(|user| {
      thread::spawn(move || {
        // A fresh thread starts from the factory, not from main's override.
        assert_eq!(whoami(), "anonymous");

        let _scope = Session::set_default(Session { user });
        println!("worker thread: {}", whoami());
        assert_eq!(whoami(), user);
      })
    })
    .collect();

  for handle in handles {
    handle.join().unwrap();
  }

  println!("main thread still: {}", whoami());
  assert_eq!(whoami(), "admin");
}
