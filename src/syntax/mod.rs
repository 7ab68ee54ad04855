//! Syntax model for the Ohm grammar-definition language.
//!
//! AST types produced by the parser. Every meaningful node carries an exact
//! [`Span`](crate::base::Span); a [`Rule`] additionally carries an immutable
//! back-reference to the identity of its owning [`Grammar`].

mod ast;

pub use ast::{Grammar, Grammars, Ident, Rule, Seq, SuperGrammar, Term};

// Re-export Position and Span from base for convenience
pub use crate::base::{Position, Span};
