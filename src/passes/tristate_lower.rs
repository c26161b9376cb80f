//! Eliminates bare tristate leaves by translating them into explicit
//! comparisons against `y` and `n`, so that [`crate::passes::symbol_expand`]
//! only ever has to handle `Eq`/`Neq`.
//!
//! This pass is driven by parent context — whether a leaf sits as a direct
//! child of `And`/`Or` versus inside a comparison — which [`crate::walker`]'s
//! context-free visitor cannot express without risking a rewrite of an
//! `Eq`/`Neq` operand. It recurses by hand instead, leaving comparison nodes
//! and their operands untouched at every depth.

use crate::ast::Node;
use crate::mode::Mode;
use crate::symtab::SymbolTable;

pub fn apply(tree: Option<Node>, symtab: &dyn SymbolTable, mode: Mode) -> Option<Node> {
    tree.map(|node| lower(node, symtab, mode))
}

fn is_known_tristate(symtab: &dyn SymbolTable, name: &str) -> bool {
    symtab.known(name) && symtab.is_tristate(name)
}

/// Rewrites `node` as a child of `And`/`Or`; recurses into composite
/// children so nested conjunctions/disjunctions are lowered throughout,
/// while `Eq`/`Neq` subtrees are returned verbatim.
fn lower(node: Node, symtab: &dyn SymbolTable, mode: Mode) -> Node {
    match node {
        Node::Not(inner) if is_tristate_leaf(&inner, symtab) => {
            let Node::Leaf(name) = *inner else { unreachable!() };
            match mode {
                Mode::M => Node::neq(Node::leaf(name), Node::leaf("y")),
                Mode::Y => Node::eq(Node::leaf(name), Node::leaf("n")),
            }
        }
        Node::Leaf(name) if is_known_tristate(symtab, &name) => match mode {
            Mode::M => Node::neq(Node::leaf(name), Node::leaf("n")),
            Mode::Y => Node::eq(Node::leaf(name), Node::leaf("y")),
        },
        Node::And(children) => {
            Node::And(children.into_iter().map(|c| lower(c, symtab, mode)).collect())
        }
        Node::Or(children) => {
            Node::Or(children.into_iter().map(|c| lower(c, symtab, mode)).collect())
        }
        Node::Not(inner) => Node::not(lower(*inner, symtab, mode)),
        eq @ Node::Eq(..) => eq,
        neq @ Node::Neq(..) => neq,
        leaf @ Node::Leaf(_) => leaf,
    }
}

fn is_tristate_leaf(node: &Node, symtab: &dyn SymbolTable) -> bool {
    matches!(node, Node::Leaf(name) if is_known_tristate(symtab, name))
}
