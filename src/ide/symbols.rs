//! Document symbols implementation.

use std::path::Path;
use std::sync::Arc;

use crate::base::Span;
use crate::index::GrammarIndex;

/// A symbol for the document outline: one entry per rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    /// The rule name.
    pub name: Arc<str>,
    /// Name of the containing grammar.
    pub container: Arc<str>,
    /// Span of the rule's name token.
    pub span: Span,
}

/// Symbols declared in the document itself (referenced documents excluded).
pub fn document_symbols(index: &GrammarIndex, document: &Path) -> Vec<SymbolInfo> {
    let Some(ast) = index.grammar(document) else {
        return Vec::new();
    };

    ast.rules()
        .map(|rule| SymbolInfo {
            name: rule.name.text.clone(),
            container: rule.owner.text.clone(),
            span: rule.name.span,
        })
        .collect()
}
