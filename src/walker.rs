//! The generic rewriter shared by the passes that don't need to be aware of
//! parent context ([`crate::passes::choice_strip`] and
//! [`crate::passes::symbol_expand`]).
//!
//! `NotPushdown` and `TristateLower` rewrite a node differently depending on
//! whether it sits as a direct child of `And`/`Or`, so they walk the tree
//! themselves instead of going through this module — see their doc comments.

use crate::ast::Node;
use crate::error::RewriteError;

/// The outcome a visitor reports for a node it has been consulted on.
pub enum Outcome {
    /// Substitute `Node` for the current node. The walker does not descend
    /// into the replacement.
    Replace(Node),
    /// Leave the node in place and recurse into its children.
    Descend,
    /// Remove the node from its parent's child list.
    Drop,
}

/// Walk `node`, consulting `visit` on every node before descending into its
/// children. Returns `None` if the whole tree was dropped.
///
/// `And`/`Or` nodes left with a single child after their children are
/// rewritten collapse into that child; left with none, they drop and the
/// drop propagates to their own parent.
pub fn walk(
    node: Node,
    visit: &mut impl FnMut(&Node) -> Result<Outcome, RewriteError>,
) -> Result<Option<Node>, RewriteError> {
    match visit(&node)? {
        Outcome::Replace(new_node) => Ok(Some(new_node)),
        Outcome::Drop => Ok(None),
        Outcome::Descend => match node {
            Node::And(children) => collapse(children, visit, Node::And),
            Node::Or(children) => collapse(children, visit, Node::Or),
            Node::Not(child) => Ok(walk(*child, visit)?.map(|c| Node::Not(Box::new(c)))),
            Node::Eq(l, r) => Ok(walk_pair(*l, *r, visit)?.map(|(l, r)| Node::eq(l, r))),
            Node::Neq(l, r) => Ok(walk_pair(*l, *r, visit)?.map(|(l, r)| Node::neq(l, r))),
            leaf @ Node::Leaf(_) => Ok(Some(leaf)),
        },
    }
}

fn walk_pair(
    left: Node,
    right: Node,
    visit: &mut impl FnMut(&Node) -> Result<Outcome, RewriteError>,
) -> Result<Option<(Node, Node)>, RewriteError> {
    let left = walk(left, visit)?;
    let right = walk(right, visit)?;
    Ok(match (left, right) {
        (Some(l), Some(r)) => Some((l, r)),
        _ => None,
    })
}

fn collapse(
    children: Vec<Node>,
    visit: &mut impl FnMut(&Node) -> Result<Outcome, RewriteError>,
    ctor: fn(Vec<Node>) -> Node,
) -> Result<Option<Node>, RewriteError> {
    let mut rewritten = Vec::with_capacity(children.len());
    for child in children {
        if let Some(child) = walk(child, visit)? {
            rewritten.push(child);
        }
    }
    Ok(match rewritten.len() {
        0 => None,
        1 => rewritten.pop(),
        _ => Some(ctor(rewritten)),
    })
}
