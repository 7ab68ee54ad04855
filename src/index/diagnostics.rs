//! Diagnostics — per-document parse failure reporting.
//!
//! One diagnostic slot per document: a failing parse replaces the previous
//! diagnostic, the next successful parse clears it. No history accumulation.

use std::sync::Arc;

use crate::base::Span;
use crate::parser::ParseError;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Source range in the document's latest text.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            span,
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        Self::error(error.span, error.message.as_str())
    }
}
