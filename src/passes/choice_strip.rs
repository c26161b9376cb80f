//! Removes `CHOICE_*` pseudo-symbols, artifacts of the RSF dump format that
//! carry no semantic weight in the presence-condition pipeline.

use crate::ast::Node;
use crate::walker::{self, Outcome};

const CHOICE_PREFIX: &str = "CHOICE_";

pub fn apply(tree: Option<Node>) -> Option<Node> {
    tree.and_then(|node| {
        walker::walk(node, &mut |node| {
            Ok(match node {
                Node::Leaf(name) if name.starts_with(CHOICE_PREFIX) => Outcome::Drop,
                _ => Outcome::Descend,
            })
        })
        .expect("choice_strip never raises a RewriteError")
    })
}
