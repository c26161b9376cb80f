use thiserror::Error;

/// Raised by the parser on a syntactically invalid input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to parse expression: {input:?}")]
pub struct ParseError {
    pub input: String,
}

/// Raised by `SymbolExpand` when a comparison holds a reserved literal
/// (`y`, `m`, `n`) on both sides, such as `y = n`. This is a malformed
/// input, not a condition the pipeline can encode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot compare reserved literal {left:?} with reserved literal {right:?}")]
pub struct RewriteError {
    pub left: String,
    pub right: String,
}

/// Either stage of the pipeline that can fail, surfaced by
/// [`crate::try_rewrite`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}
