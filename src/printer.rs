//! Emits the final tree as the canonical `!`/`&&`/`||` textual form.

use crate::ast::Node;

/// Prints `tree`, or the empty string for the "no constraint" sentinel.
pub fn print(tree: &Option<Node>) -> String {
    match tree {
        None => String::new(),
        Some(node) => print_node(node),
    }
}

fn print_node(node: &Node) -> String {
    match node {
        Node::Leaf(name) => name.clone(),
        Node::Not(inner) => format!("!{}", print_node(inner)),
        Node::And(children) => print_joined(children, " && "),
        Node::Or(children) => print_joined(children, " || "),
        Node::Eq(left, right) => format!("{} = {}", print_node(left), print_node(right)),
        Node::Neq(left, right) => format!("{} != {}", print_node(left), print_node(right)),
    }
}

fn print_joined(children: &[Node], separator: &str) -> String {
    let joined = children
        .iter()
        .map(print_node)
        .collect::<Vec<_>>()
        .join(separator);
    if children.len() == 1 {
        joined
    } else {
        format!("({joined})")
    }
}
