//! Wires the six passes together into the crate's public entry points.

use crate::ast::Node;
use crate::error::{PipelineError, RewriteError};
use crate::fresh::FreshAtoms;
use crate::mode::Mode;
use crate::parser;
use crate::passes::{choice_strip, not_pushdown, symbol_expand, tristate_lower};
use crate::printer;
use crate::symtab::SymbolTable;

/// Parses `input`, rewrites it under `mode` against `symtab`, and prints the
/// result. A parse failure yields the empty string, matching the source's
/// per-option expansion boundary, which must not fail the whole batch on one
/// malformed dependency. A comparison of reserved literal against reserved
/// literal is a malformed *condition*, not a malformed parse, and is still
/// surfaced as a `RewriteError`; use [`try_rewrite`] to additionally observe
/// parse failures.
pub fn rewrite(
    input: &str,
    symtab: &dyn SymbolTable,
    mode: Mode,
    fresh: &FreshAtoms,
) -> Result<String, RewriteError> {
    let tree = match parser::parse(input) {
        Ok(tree) => tree,
        Err(_) => return Ok(String::new()),
    };
    let tree = rewrite_tree(tree, symtab, mode, fresh)?;
    Ok(printer::print(&tree))
}

/// As [`rewrite`], but also surfaces a parse failure instead of absorbing
/// it.
pub fn try_rewrite(
    input: &str,
    symtab: &dyn SymbolTable,
    mode: Mode,
    fresh: &FreshAtoms,
) -> Result<String, PipelineError> {
    let tree = parser::parse(input)?;
    let tree = rewrite_tree(tree, symtab, mode, fresh)?;
    Ok(printer::print(&tree))
}

fn rewrite_tree(
    tree: Node,
    symtab: &dyn SymbolTable,
    mode: Mode,
    fresh: &FreshAtoms,
) -> Result<Option<Node>, crate::error::RewriteError> {
    let tree = Some(tree.wrap_root());
    let tree = not_pushdown::apply(tree);
    let tree = choice_strip::apply(tree);
    let tree = tristate_lower::apply(tree, symtab, mode);
    symbol_expand::apply(tree, symtab, mode, fresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symtab::{OptionKind, SimpleSymbolTable};

    fn table() -> SimpleSymbolTable {
        SimpleSymbolTable::new()
            .with_option("A", OptionKind::Tristate)
            .with_option("B", OptionKind::Tristate)
            .with_option("X", OptionKind::Boolean)
    }

    #[test]
    fn scenario_a_present_in_mode_m() {
        let out = rewrite("A", &table(), Mode::M, &FreshAtoms::new()).unwrap();
        assert_eq!("(CONFIG_A_MODULE || CONFIG_A)", out);
    }

    #[test]
    fn scenario_a_present_in_mode_y() {
        let out = rewrite("A", &table(), Mode::Y, &FreshAtoms::new()).unwrap();
        assert_eq!("CONFIG_A", out);
    }

    #[test]
    fn scenario_negated_a_in_mode_m() {
        let out = rewrite("!A", &table(), Mode::M, &FreshAtoms::new()).unwrap();
        assert_eq!("!CONFIG_A", out);
    }

    #[test]
    fn scenario_a_equals_n_in_mode_m() {
        let out = rewrite("A = n", &table(), Mode::M, &FreshAtoms::new()).unwrap();
        assert_eq!("(!CONFIG_A_MODULE && !CONFIG_A)", out);
    }

    #[test]
    fn scenario_a_and_not_x_in_mode_m() {
        let out = rewrite("A && !X", &table(), Mode::M, &FreshAtoms::new()).unwrap();
        assert_eq!("((CONFIG_A_MODULE || CONFIG_A) && !CONFIG_X)", out);
    }

    #[test]
    fn scenario_a_equals_b_in_mode_y() {
        let out = rewrite("A = B", &table(), Mode::Y, &FreshAtoms::new()).unwrap();
        assert_eq!(
            "((CONFIG_A && CONFIG_B) || (CONFIG_A_MODULE && CONFIG_B_MODULE) || \
             (!CONFIG_A && !CONFIG_B && !CONFIG_A_MODULE && !CONFIG_B_MODULE))",
            out
        );
    }

    #[test]
    fn scenario_choice_strip_is_transparent() {
        let with_choice = rewrite("CHOICE_7 && A", &table(), Mode::M, &FreshAtoms::new()).unwrap();
        let without_choice = rewrite("A", &table(), Mode::M, &FreshAtoms::new()).unwrap();
        assert_eq!(without_choice, with_choice);
    }

    #[test]
    fn scenario_y_equals_n_is_a_rewrite_error() {
        assert!(rewrite("y = n", &table(), Mode::M, &FreshAtoms::new()).is_err());
        let result = try_rewrite("y = n", &table(), Mode::M, &FreshAtoms::new());
        assert!(matches!(result, Err(PipelineError::Rewrite(_))));
    }

    #[test]
    fn a_parse_failure_is_absorbed_into_the_empty_string() {
        assert_eq!(
            "",
            rewrite(")(invalid-", &table(), Mode::M, &FreshAtoms::new()).unwrap()
        );
    }

    #[test]
    fn a_parse_failure_surfaces_through_try_rewrite() {
        let result = try_rewrite(")(invalid-", &table(), Mode::M, &FreshAtoms::new());
        assert!(matches!(result, Err(PipelineError::Parse(_))));
    }

    #[test]
    fn fresh_atoms_are_distinct_across_two_bare_m_literals() {
        let out = rewrite("m && m", &table(), Mode::M, &FreshAtoms::new()).unwrap();
        let atoms: Vec<_> = out.trim_matches(['(', ')']).split(" && ").collect();
        assert_eq!(2, atoms.len());
        assert_ne!(atoms[0], atoms[1]);
    }
}
