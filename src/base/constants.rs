//! Domain constants shared across the crate.

/// File extension for Ohm grammar-definition documents.
pub const GRAMMAR_FILE_EXTENSION: &str = "ohm";
