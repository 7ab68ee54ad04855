//! # ohmlang-base
//!
//! Core library for Ohm grammar parsing, AST construction, and cross-file
//! semantic indexing.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (hover, goto-def, rename, completion, symbols)
//!   ↓
//! index     → GrammarIndex cache, cross-file resolver, rule queries
//!   ↓
//! syntax    → AST types (Grammars, Grammar, Rule, Seq, Term)
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, directive scanner
//!   ↓
//! base      → Primitives (Position, Span, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → index → ide)
// ============================================================================

/// Foundation types: Position, Span, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, directive scanner
pub mod parser;

/// Syntax: AST types with exact source ranges
pub mod syntax;

/// Semantic index: per-document cache, cross-file resolver, rule queries
pub mod index;

/// IDE features: hover, go-to-definition, rename, completion, symbols
pub mod ide;

// Re-export foundation types
pub use base::{LineIndex, Position, Span};
