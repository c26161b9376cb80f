//! Drives `Not` down to leaves with the classical De Morgan identities, so
//! that every later pass only ever has to deal with negated leaves.
//!
//! This pass rewrites a `Not` and everything it might newly expose in one
//! recursive descent (rather than going through [`crate::walker`], whose
//! `Replace` outcome deliberately does not descend into the replacement) so
//! that a chain such as `!(!(A && B) || C)` is fully normalized in a single
//! top-to-bottom pass.

use crate::ast::Node;

pub fn apply(tree: Option<Node>) -> Option<Node> {
    tree.map(push_down)
}

fn push_down(node: Node) -> Node {
    match node {
        Node::Not(inner) => negate(*inner),
        Node::And(children) => Node::And(children.into_iter().map(push_down).collect()),
        Node::Or(children) => Node::Or(children.into_iter().map(push_down).collect()),
        leaf @ Node::Leaf(_) => leaf,
        eq @ Node::Eq(..) => eq,
        neq @ Node::Neq(..) => neq,
    }
}

/// Pushes a negation over `node` down, recursing so that e.g. a negated
/// `And` of negated `Or`s comes out fully normalized.
fn negate(node: Node) -> Node {
    match node {
        Node::And(children) => {
            Node::Or(children.into_iter().map(|c| negate(push_down(c))).collect())
        }
        Node::Or(children) => {
            Node::And(children.into_iter().map(|c| negate(push_down(c))).collect())
        }
        Node::Not(inner) => push_down(*inner),
        Node::Eq(l, r) => Node::Neq(l, r),
        Node::Neq(l, r) => Node::Eq(l, r),
        leaf @ Node::Leaf(_) => Node::not(leaf),
    }
}
