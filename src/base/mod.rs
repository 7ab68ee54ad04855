//! Foundation types for the ohmlang toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//! - [`LineIndex`] - Byte offset to line/column conversion
//! - Domain constants (file extensions)
//!
//! This module has NO dependencies on other ohmlang modules.

pub mod constants;
mod line_index;
mod position;

pub use constants::GRAMMAR_FILE_EXTENSION;
pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
