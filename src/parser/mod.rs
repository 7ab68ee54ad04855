//! Parser: Logos lexer, recursive-descent parser, directive scanner
//!
//! The entry point is [`parse_grammars`]: source text in, a
//! [`Grammars`](crate::syntax::Grammars) syntax model (or a structured
//! [`ParseError`]) out. The reference directive scan runs on the raw text
//! regardless of parse outcome and is also exposed separately for callers
//! that need dependency metadata from a broken document.

pub mod directives;
mod error;
pub mod lexer;
mod parser;

pub use directives::{RefMap, scan_directives};
pub use error::ParseError;
pub use lexer::{Lexer, Token, TokenKind, tokenize};

use crate::syntax::Grammars;

/// Build the syntax model for one document's text.
///
/// Deterministic and side-effect free. On success the returned value carries
/// the document's directive reference map; on failure the caller can still
/// obtain that map via [`scan_directives`].
pub fn parse_grammars(text: &str) -> Result<Grammars, ParseError> {
    let grammars = parser::parse(text)?;
    Ok(Grammars {
        grammars,
        refs: scan_directives(text),
    })
}
