//! The four rewrite passes applied, in order, by [`crate::driver`].
//!
//! Order is not commutative: `not_pushdown` must precede `tristate_lower` so
//! that `Not` has been resolved into comparisons or pushed onto leaves;
//! `tristate_lower` must precede `symbol_expand` so that only comparisons
//! and non-tristate leaves remain for it to expand.

pub mod choice_strip;
pub mod not_pushdown;
pub mod symbol_expand;
pub mod tristate_lower;
