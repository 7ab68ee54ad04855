//! AnalysisHost — Unified state management for IDE features.
//!
//! The `AnalysisHost` owns the grammar index and the file-content
//! collaborator, and translates host-editor document events into index
//! operations. All mutation flows through one context; queries are plain
//! method calls over the current state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(Box::new(FsFileLoader));
//!
//! // Apply document events
//! host.open_document(path, text).await;
//! host.change_document(path, new_text).await;
//!
//! // Query
//! let hover = host.hover(path, line, col);
//! let symbols = host.document_symbols(path);
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::base::{GRAMMAR_FILE_EXTENSION, Span};
use crate::index::{
    DecoratedRule, Diagnostic, FileLoader, FsFileLoader, GrammarIndex, MemoryFileLoader,
    RulePredicate, ensure_reachable, query_rules,
};
use crate::syntax::Grammars;

use super::completion::{CompletionItem, completions};
use super::goto::{GotoTarget, goto_definition};
use super::hover::{HoverResult, hover};
use super::rename::{WorkspaceEdit, prepare_rename, rename};
use super::symbols::{SymbolInfo, document_symbols};

/// Owns all mutable state for the IDE layer.
pub struct AnalysisHost {
    index: GrammarIndex,
    loader: Box<dyn FileLoader>,
}

impl AnalysisHost {
    /// Create a host backed by the given file-content provider.
    pub fn new(loader: Box<dyn FileLoader>) -> Self {
        Self {
            index: GrammarIndex::new(),
            loader,
        }
    }

    /// Host reading referenced documents from the filesystem.
    pub fn with_fs_loader() -> Self {
        Self::new(Box::new(FsFileLoader))
    }

    /// Host reading referenced documents from an in-memory map.
    pub fn with_memory_loader(loader: MemoryFileLoader) -> Self {
        Self::new(Box::new(loader))
    }

    fn is_grammar_document(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == GRAMMAR_FILE_EXTENSION)
    }

    // =========================================================================
    // Document events
    // =========================================================================

    /// A document was opened: cache it if not yet known, then make its
    /// reference graph reachable. Non-grammar documents are ignored.
    pub async fn open_document(&mut self, path: &Path, text: &str) {
        if !Self::is_grammar_document(path) {
            return;
        }
        self.index.refresh_from_content(path, text, false);
        ensure_reachable(&mut self.index, self.loader.as_ref(), path).await;
    }

    /// A document was edited: full reparse of the new text (never an
    /// incremental patch), then re-resolve its references.
    pub async fn change_document(&mut self, path: &Path, text: &str) {
        if !Self::is_grammar_document(path) {
            return;
        }
        self.index.refresh_from_content(path, text, true);
        ensure_reachable(&mut self.index, self.loader.as_ref(), path).await;
    }

    /// A document was deleted: drop all of its index and diagnostic state.
    /// Documents that referenced it keep their own local rules.
    pub fn delete_document(&mut self, path: &Path) {
        if !Self::is_grammar_document(path) {
            return;
        }
        self.index.remove(path);
    }

    // =========================================================================
    // Query surface
    // =========================================================================

    pub fn grammar(&self, path: &Path) -> Option<Arc<Grammars>> {
        self.index.grammar(path)
    }

    pub fn diagnostic(&self, path: &Path) -> Option<&Diagnostic> {
        self.index.diagnostic(path)
    }

    pub fn query_rules(
        &self,
        path: &Path,
        predicate: Option<RulePredicate<'_>>,
    ) -> Vec<DecoratedRule> {
        query_rules(&self.index, path, predicate)
    }

    pub fn hover(&self, path: &Path, line: usize, col: usize) -> Option<HoverResult> {
        hover(&self.index, path, line, col)
    }

    pub fn goto_definition(&self, path: &Path, line: usize, col: usize) -> Vec<GotoTarget> {
        goto_definition(&self.index, path, line, col)
    }

    pub fn prepare_rename(&self, path: &Path, line: usize, col: usize) -> Option<Span> {
        prepare_rename(&self.index, path, line, col)
    }

    pub fn rename(
        &self,
        path: &Path,
        line: usize,
        col: usize,
        new_name: &str,
    ) -> Option<WorkspaceEdit> {
        rename(&self.index, path, line, col, new_name)
    }

    pub fn completions(&self, path: &Path) -> Vec<CompletionItem> {
        completions(&self.index, path)
    }

    pub fn document_symbols(&self, path: &Path) -> Vec<SymbolInfo> {
        document_symbols(&self.index, path)
    }

    /// Direct access to the underlying index.
    pub fn index(&self) -> &GrammarIndex {
        &self.index
    }
}
