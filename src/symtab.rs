//! The symbol table contract consulted by `TristateLower` and
//! `SymbolExpand`. Populating it from an RSF dump (scanning `Item`,
//! `Depends`, `HasPrompts`, `Choice` and `ChoiceItem` records) is the
//! responsibility of the external RSF reader and out of scope for this
//! crate; [`SimpleSymbolTable`] is a minimal in-memory implementation
//! usable directly by callers that already have option metadata in hand,
//! and by this crate's own tests.

use std::collections::HashMap;

/// A read-only mapping from option name to the facts the rewrite pipeline
/// needs: whether the name is declared, and whether it is tristate.
pub trait SymbolTable {
    /// Whether `name` is a declared option.
    fn known(&self, name: &str) -> bool;

    /// Whether `name` is declared as tristate, as opposed to plain boolean
    /// or integer. Only meaningful when `known(name)` is true.
    fn is_tristate(&self, name: &str) -> bool;

    /// The atom asserting that `name` is selected as built-in.
    fn atom_y(&self, name: &str) -> String {
        format!("CONFIG_{name}")
    }

    /// The atom asserting that `name` is selected as a module. Constructed
    /// the same way even for non-tristate names; downstream treats it as an
    /// independent atom.
    fn atom_m(&self, name: &str) -> String {
        format!("CONFIG_{name}_MODULE")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Boolean,
    Tristate,
    Integer,
}

/// A minimal in-memory [`SymbolTable`], keyed by option name.
#[derive(Clone, Debug, Default)]
pub struct SimpleSymbolTable {
    options: HashMap<String, OptionKind>,
}

impl SimpleSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_option(mut self, name: impl Into<String>, kind: OptionKind) -> Self {
        self.options.insert(name.into(), kind);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, kind: OptionKind) {
        self.options.insert(name.into(), kind);
    }
}

impl SymbolTable for SimpleSymbolTable {
    fn known(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    fn is_tristate(&self, name: &str) -> bool {
        matches!(self.options.get(name), Some(OptionKind::Tristate))
    }
}
