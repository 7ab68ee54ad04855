//! IDE features — High-level APIs for LSP handlers.
//!
//! This module provides the interface between the semantic index and the
//! host editor. Each feature is one free function over the shared query
//! surface; `AnalysisHost` composes them with the index and file loader.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No editor types**: Uses our own types, converted at the host boundary
//! 3. **Composable**: Every feature reads through the same rule query engine

mod analysis;
mod completion;
mod goto;
mod hover;
mod rename;
mod symbols;
pub mod text_utils;

pub use analysis::AnalysisHost;
pub use completion::{CompletionItem, CompletionKind, completions};
pub use goto::{GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use rename::{TextEdit, WorkspaceEdit, prepare_rename, rename};
pub use symbols::{SymbolInfo, document_symbols};
pub use text_utils::word_at_position;
