/// Governs how a tristate option's "presence" is interpreted while lowering
/// it to a boolean atom. The same Kconfig dependency yields different
/// propositional encodings under the two modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// "Evaluate to built-in": an option is present only when selected as
    /// `y`.
    Y,
    /// "Evaluate to module": an option is present when selected as `y` or
    /// `m`.
    M,
}
