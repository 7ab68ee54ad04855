//! Semantic index over grammar documents.
//!
//! - [`GrammarIndex`] — per-document cache of the latest syntax model, with
//!   last-known-good fallback and a single diagnostic slot per document
//! - [`ensure_reachable`] — cross-file resolver walking directive reference
//!   maps, loading missing documents through a [`FileLoader`]
//! - [`query_rules`] — enumerate all rules reachable from a document,
//!   decorated with their origin document identity

mod diagnostics;
mod grammar_index;
mod loader;
mod query;
mod resolver;

pub use diagnostics::{Diagnostic, Severity};
pub use grammar_index::{GrammarIndex, RefreshOutcome};
pub use loader::{FileLoader, FsFileLoader, MemoryFileLoader};
pub use query::{DecoratedRule, RulePredicate, query_rules, reachable_documents};
pub use resolver::{ensure_reachable, resolve_ref};
