//! Go-to-definition implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::base::Span;
use crate::index::{DecoratedRule, GrammarIndex, query_rules};

use super::text_utils::word_at_position;

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The document containing the target.
    pub document: PathBuf,
    /// Span of the rule's name token.
    pub span: Span,
    /// The rule name.
    pub name: Arc<str>,
}

/// Find every reachable rule declaration matching the word at the position.
///
/// Same-named rules in multiple reachable documents all become targets;
/// nothing is deduplicated here.
pub fn goto_definition(
    index: &GrammarIndex,
    document: &Path,
    line: usize,
    col: usize,
) -> Vec<GotoTarget> {
    let Some(text) = index.text(document) else {
        return Vec::new();
    };
    let Some((word, _)) = word_at_position(&text, line, col) else {
        return Vec::new();
    };

    query_rules(
        index,
        document,
        Some(&|r: &DecoratedRule| r.rule.name.text.as_ref() == word),
    )
    .into_iter()
    .map(|decorated| GotoTarget {
        document: decorated.document,
        span: decorated.rule.name.span,
        name: decorated.rule.name.text,
    })
    .collect()
}
