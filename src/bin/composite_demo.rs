// Composite Pattern walkthrough: a word tree visited in insertion order,
// then pruned and visited again.

use classic_patterns::composite::{Component, Composite, Leaf};

fn print_words(root: &Composite<&str>) {
    let mut words = Vec::new();
    root.perform_action(&mut |word| words.push(*word));
    println!("visited: {}", words.join(" "));
}

fn main() {
    println!("Composite Pattern: Word Tree");
    println!("============================\n");

    let mut branch = Composite::new();
    branch.add(Leaf::new("hello"));
    branch.add(Leaf::new("world"));
    let branch = Component::from(branch);

    let mut root = Composite::new();
    root.add(Component::leaf("foo"));
    root.add(Component::leaf("bar"));
    root.add(Component::leaf("baz"));
    root.add(branch.clone());

    println!("=== Full tree ===");
    print_words(&root);

    println!("\n=== After removing the branch ===");
    root.remove(&branch);
    print_words(&root);

    println!("\n=== Empty composite is a no-op ===");
    let empty: Composite<&str> = Composite::new();
    print_words(&empty);
}
