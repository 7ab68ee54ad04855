//! GrammarIndex — per-document cache of the latest syntax model.
//!
//! The index is the single shared mutable structure of the crate. It is
//! mutated only from the one event-processing context (no locking), and all
//! stored `Grammars` values are immutable: a refresh swaps in a whole new
//! value, never edits one in place.
//!
//! Per-document state machine:
//!
//! ```text
//! Unparsed → Valid(ast) | Invalid(last_good_ast?, diagnostic)
//! ```
//!
//! A failing parse keeps serving the last valid AST so navigation features
//! degrade to stale results instead of going blank. Each actual refresh bumps
//! a monotonic per-document version; in-flight loads carry the version they
//! observed and are discarded on writeback when it is stale.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::parser::{self, RefMap};
use crate::syntax::Grammars;

use super::diagnostics::Diagnostic;

/// Result of a [`GrammarIndex::refresh_from_content`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Entry existed and `force` was false — no reparse happened.
    Cached,
    /// Reparsed successfully; the AST was replaced.
    Updated,
    /// Reparse failed; a diagnostic was recorded and any prior AST retained.
    Failed,
}

/// Everything the index knows about one document.
#[derive(Debug, Default)]
struct DocumentState {
    /// Latest valid syntax model, possibly from an older text than `text`.
    ast: Option<Arc<Grammars>>,
    /// Directive reference map from the latest text, parse success or not.
    refs: RefMap,
    /// The latest full text, kept for word-at-position queries.
    text: Arc<str>,
    /// At most one diagnostic; present iff the latest parse failed.
    diagnostic: Option<Diagnostic>,
    /// Bumped on every actual refresh of this document.
    version: u64,
}

/// Per-document-identity cache of syntax models and diagnostics.
#[derive(Debug, Default)]
pub struct GrammarIndex {
    docs: FxHashMap<PathBuf, DocumentState>,
}

impl GrammarIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The latest valid syntax model for `id`, if any.
    pub fn grammar(&self, id: &Path) -> Option<Arc<Grammars>> {
        self.docs.get(id).and_then(|state| state.ast.clone())
    }

    /// The latest full text of `id`.
    pub fn text(&self, id: &Path) -> Option<Arc<str>> {
        self.docs.get(id).map(|state| state.text.clone())
    }

    /// The current diagnostic for `id`, if its latest parse failed.
    pub fn diagnostic(&self, id: &Path) -> Option<&Diagnostic> {
        self.docs.get(id).and_then(|state| state.diagnostic.as_ref())
    }

    /// The directive reference map scanned from `id`'s latest text.
    ///
    /// Available even when the document never parsed successfully.
    pub fn refs(&self, id: &Path) -> Option<&RefMap> {
        self.docs.get(id).map(|state| &state.refs)
    }

    pub fn contains(&self, id: &Path) -> bool {
        self.docs.contains_key(id)
    }

    /// Monotonic version stamp for `id`; 0 when the document is absent.
    pub fn version(&self, id: &Path) -> u64 {
        self.docs.get(id).map(|state| state.version).unwrap_or(0)
    }

    /// Document identities currently tracked.
    pub fn documents(&self) -> impl Iterator<Item = &Path> {
        self.docs.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Refresh `id` from its full latest text.
    ///
    /// With `force == false` an existing entry is returned as-is without
    /// reparsing (the idle fast path for documents opened but unedited).
    /// Otherwise the text is reparsed: success replaces the AST and clears
    /// the diagnostic; failure records a diagnostic and keeps the previous
    /// AST, if any, as the last-known-good model.
    pub fn refresh_from_content(&mut self, id: &Path, text: &str, force: bool) -> RefreshOutcome {
        if !force && self.docs.contains_key(id) {
            trace!(document = %id.display(), "refresh skipped, entry cached");
            return RefreshOutcome::Cached;
        }
        self.refresh_inner(id, text)
    }

    /// Writeback for a load that began when `id` was at version `stamp`.
    ///
    /// Discarded (returning `None`) when the document has been refreshed in
    /// the meantime — a stale in-flight load must not overwrite newer
    /// content.
    pub fn apply_loaded(&mut self, id: &Path, text: &str, stamp: u64) -> Option<RefreshOutcome> {
        let current = self.version(id);
        if current != stamp {
            debug!(
                document = %id.display(),
                stamp,
                current,
                "discarding stale writeback"
            );
            return None;
        }
        Some(self.refresh_inner(id, text))
    }

    fn refresh_inner(&mut self, id: &Path, text: &str) -> RefreshOutcome {
        let state = self.docs.entry(id.to_path_buf()).or_default();
        state.version += 1;
        state.text = Arc::from(text);

        match parser::parse_grammars(text) {
            Ok(grammars) => {
                state.refs = grammars.refs.clone();
                state.ast = Some(Arc::new(grammars));
                state.diagnostic = None;
                debug!(document = %id.display(), version = state.version, "grammar updated");
                RefreshOutcome::Updated
            }
            Err(error) => {
                // Best-effort: dependency metadata survives a broken parse.
                state.refs = parser::scan_directives(text);
                state.diagnostic = Some(Diagnostic::from(&error));
                debug!(
                    document = %id.display(),
                    version = state.version,
                    error = %error,
                    "parse failed, retaining last valid grammar"
                );
                RefreshOutcome::Failed
            }
        }
    }

    /// Remove all state for `id`.
    pub fn remove(&mut self, id: &Path) -> bool {
        self.docs.remove(id).is_some()
    }
}
