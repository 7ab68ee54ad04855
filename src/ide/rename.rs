//! Rename implementation.
//!
//! Renaming a rule rewrites every occurrence of its identifier across the
//! whole reachable document set: rule name tokens and application-term
//! identifiers, including identifiers inside nested argument sequences of
//! parameterized applications. Matching is exact — identifiers that merely
//! contain the word as a substring are untouched.

use std::path::{Path, PathBuf};

use crate::base::Span;
use crate::index::{DecoratedRule, GrammarIndex, query_rules, reachable_documents};
use crate::syntax::{Seq, Term};

use super::text_utils::word_at_position;

/// A single text replacement in one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub document: PathBuf,
    pub span: Span,
    pub new_text: String,
}

/// The full set of edits a rename produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceEdit {
    pub edits: Vec<TextEdit>,
}

/// Validate a rename request: the word under the cursor must name a rule
/// declared somewhere in the reachable set. Returns the word's span.
pub fn prepare_rename(
    index: &GrammarIndex,
    document: &Path,
    line: usize,
    col: usize,
) -> Option<Span> {
    let text = index.text(document)?;
    let (word, span) = word_at_position(&text, line, col)?;

    let declared = !query_rules(
        index,
        document,
        Some(&|r: &DecoratedRule| r.rule.name.text.as_ref() == word),
    )
    .is_empty();
    declared.then_some(span)
}

/// Compute the edits renaming the identifier at the position to `new_name`.
pub fn rename(
    index: &GrammarIndex,
    document: &Path,
    line: usize,
    col: usize,
    new_name: &str,
) -> Option<WorkspaceEdit> {
    let text = index.text(document)?;
    let (word, _) = word_at_position(&text, line, col)?;
    prepare_rename(index, document, line, col)?;

    let mut edit = WorkspaceEdit::default();
    for doc in reachable_documents(index, document) {
        let Some(ast) = index.grammar(&doc) else {
            continue;
        };
        for rule in ast.rules() {
            if rule.name.text.as_ref() == word {
                push_edit(&mut edit, &doc, rule.name.span, new_name);
            }
            for seq in &rule.body {
                collect_in_seq(&mut edit, &doc, seq, &word, new_name);
            }
        }
    }
    Some(edit)
}

fn collect_in_seq(edit: &mut WorkspaceEdit, doc: &Path, seq: &Seq, word: &str, new_name: &str) {
    for term in &seq.terms {
        if let Term::Application { ident, args, .. } = term {
            if ident.text.as_ref() == word {
                push_edit(edit, doc, ident.span, new_name);
            }
            for arg in args {
                collect_in_seq(edit, doc, arg, word, new_name);
            }
        }
    }
}

fn push_edit(edit: &mut WorkspaceEdit, doc: &Path, span: Span, new_name: &str) {
    edit.edits.push(TextEdit {
        document: doc.to_path_buf(),
        span,
        new_text: new_name.to_string(),
    });
}
