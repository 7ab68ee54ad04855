//! Parse failure type for the grammar parser.

use thiserror::Error;

use crate::base::Span;

/// A structured parse failure: the first syntax error encountered.
///
/// Parsing is all-or-nothing; there is no error recovery. The span points at
/// the offending token (zero-width at end of input when the source ends
/// unexpectedly). Downstream the failure becomes a single per-document
/// diagnostic while the index keeps serving the last valid AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,
    /// Source location of the failure
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
