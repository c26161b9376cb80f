//! Extracts *presence conditions* from Kconfig dumps: given a configuration
//! option's Kconfig dependency expression, produces a pure boolean formula
//! over `CONFIG_*` atoms that is satisfied exactly when the option can be
//! selected.
//!
//! This crate is the core of such a pipeline — the three-valued expression
//! language, its normalization, and its expansion into classical
//! propositional logic. Reading an RSF dump into a [`SymbolTable`] and
//! walking a source tree to collect dependency strings are the
//! responsibility of the embedding application.
//!
//! # Pipeline
//!
//! ```text
//! input string ──► Parser ──► raw tree ──► NotPushdown ──►
//!                 ChoiceStrip ──► TristateLower ──► SymbolExpand ──►
//!                 final boolean tree ──► Printer ──► output string
//! ```
//!
//! # Example
//!
//! ```
//! use kconfig_presence::{rewrite, FreshAtoms, Mode, OptionKind, SimpleSymbolTable};
//!
//! let symtab = SimpleSymbolTable::new().with_option("A", OptionKind::Tristate);
//! let fresh = FreshAtoms::new();
//!
//! assert_eq!(
//!     "CONFIG_A",
//!     rewrite("A", &symtab, Mode::Y, &fresh).unwrap(),
//! );
//! assert_eq!(
//!     "(CONFIG_A_MODULE || CONFIG_A)",
//!     rewrite("A", &symtab, Mode::M, &fresh).unwrap(),
//! );
//! ```

mod ast;
mod driver;
mod error;
mod fresh;
mod lexer;
mod mode;
mod parser;
mod passes;
mod printer;
mod symtab;
#[cfg(test)]
mod test_utils;
mod walker;

pub use crate::{
    driver::{rewrite, try_rewrite},
    error::{ParseError, PipelineError, RewriteError},
    fresh::FreshAtoms,
    mode::Mode,
    symtab::{OptionKind, SimpleSymbolTable, SymbolTable},
};
