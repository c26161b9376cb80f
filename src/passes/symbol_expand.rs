//! Replaces every remaining `Leaf`/`Eq`/`Neq` node with a pure propositional
//! subtree over `CONFIG_*` atoms and fresh atoms.
//!
//! Unlike `NotPushdown`/`TristateLower`, this pass is context-free — a leaf
//! or comparison means the same thing regardless of where it sits — so it is
//! a straightforward visitor over [`crate::walker`].

use crate::ast::Node;
use crate::error::RewriteError;
use crate::fresh::FreshAtoms;
use crate::mode::Mode;
use crate::symtab::SymbolTable;
use crate::walker::{self, Outcome};

pub fn apply(
    tree: Option<Node>,
    symtab: &dyn SymbolTable,
    mode: Mode,
    fresh: &FreshAtoms,
) -> Result<Option<Node>, RewriteError> {
    match tree {
        None => Ok(None),
        Some(node) => walker::walk(node, &mut |node| visit(node, symtab, mode, fresh)),
    }
}

fn visit(
    node: &Node,
    symtab: &dyn SymbolTable,
    mode: Mode,
    fresh: &FreshAtoms,
) -> Result<Outcome, RewriteError> {
    match node {
        Node::Leaf(name) if is_literal(name, "m") => Ok(Outcome::Replace(expand_bare_m(mode, fresh))),
        Node::Leaf(name) => Ok(Outcome::Replace(Node::leaf(symtab.atom_y(name)))),
        Node::Eq(left, right) => expand_comparison(left, right, false, symtab).map(Outcome::Replace),
        Node::Neq(left, right) => expand_comparison(left, right, true, symtab).map(Outcome::Replace),
        _ => Ok(Outcome::Descend),
    }
}

/// A bare `m` literal: in mode `m` it's contingently satisfiable (a fresh
/// atom, free to be true or false); in mode `y` it's a canonical
/// contradiction, since being only a module can never count as built-in.
fn expand_bare_m(mode: Mode, fresh: &FreshAtoms) -> Node {
    let atom = fresh.next();
    match mode {
        Mode::M => Node::leaf(atom),
        Mode::Y => Node::And(vec![Node::leaf(atom.clone()), Node::not(Node::leaf(atom))]),
    }
}

fn is_literal(name: &str, which: &str) -> bool {
    name.eq_ignore_ascii_case(which)
}

fn is_reserved_literal(name: &str) -> bool {
    is_literal(name, "y") || is_literal(name, "m") || is_literal(name, "n")
}

fn leaf_name(node: &Node) -> &str {
    match node {
        Node::Leaf(name) => name,
        _ => unreachable!("Eq/Neq operands are always Leaf up to SymbolExpand"),
    }
}

/// Encodes `left <op> right`, `op` being `!=` when `negated`. Mirrors the
/// source's left/right-swap-then-recheck-left quirk: swap so a reserved
/// literal ends up on the right, then re-check the (possibly swapped) left —
/// if it is *still* a literal, both sides were literals.
fn expand_comparison(
    left: &Node,
    right: &Node,
    negated: bool,
    symtab: &dyn SymbolTable,
) -> Result<Node, RewriteError> {
    let (mut left, mut right) = (leaf_name(left).to_string(), leaf_name(right).to_string());
    if is_reserved_literal(&left) {
        std::mem::swap(&mut left, &mut right);
    }
    if is_reserved_literal(&left) {
        return Err(RewriteError { left, right });
    }

    let ly = Node::leaf(symtab.atom_y(&left));
    let lm = Node::leaf(symtab.atom_m(&left));

    if is_reserved_literal(&right) {
        Ok(match (negated, right.to_ascii_lowercase().as_str()) {
            (false, "y") => ly,
            (false, "m") => lm,
            (false, "n") => Node::And(vec![Node::not(lm), Node::not(ly)]),
            (true, "y") => Node::not(ly),
            (true, "m") => Node::not(lm),
            (true, "n") => Node::Or(vec![lm, ly]),
            _ => unreachable!("is_reserved_literal only accepts y/m/n"),
        })
    } else {
        let ry = Node::leaf(symtab.atom_y(&right));
        let rm = Node::leaf(symtab.atom_m(&right));
        Ok(if !negated {
            Node::Or(vec![
                Node::And(vec![ly.clone(), ry.clone()]),
                Node::And(vec![lm.clone(), rm.clone()]),
                Node::And(vec![
                    Node::not(ly),
                    Node::not(ry),
                    Node::not(lm),
                    Node::not(rm),
                ]),
            ])
        } else {
            Node::Or(vec![
                Node::And(vec![ly.clone(), Node::not(ry.clone())]),
                Node::And(vec![lm.clone(), Node::not(rm.clone())]),
                Node::And(vec![Node::not(ly), ry]),
                Node::And(vec![Node::not(lm), rm]),
            ])
        })
    }
}
