use scoped_default::{scoped_default, HasDefault};
use std::sync::Arc;

// An ambient "current graph" that helper functions reach without taking it
// as a parameter.
struct Graph {
  name: &'static str,
}

scoped_default!(Graph);

fn describe_current() -> String {
  match Graph::get_default() {
    Some(graph) => format!("building into '{}'", graph.name),
    None => "no graph in scope".to_string(),
  }
}

fn main() {
  println!("--- Before any scope ---");
  println!("{}", describe_current());
  assert_eq!(describe_current(), "no graph in scope");

  let main_graph = Arc::new(Graph { name: "main" });
  {
    let _outer = main_graph.clone().as_default();
    println!("--- Inside the outer scope ---");
    println!("{}", describe_current());
    assert_eq!(describe_current(), "building into 'main'");

    {
      let _inner = Graph::set_default(Graph { name: "scratch" });
      println!("--- Inside the nested scope ---");
      println!("{}", describe_current());
      assert_eq!(describe_current(), "building into 'scratch'");
    }

    println!("--- Back in the outer scope ---");
    println!("{}", describe_current());
    assert_eq!(describe_current(), "building into 'main'");
  }

  println!("--- After all scopes ---");
  println!("{}", describe_current());
  assert_eq!(describe_current(), "no graph in scope");
}
