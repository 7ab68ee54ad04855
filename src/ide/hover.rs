//! Hover information implementation.

use std::path::Path;

use crate::base::Span;
use crate::index::{DecoratedRule, GrammarIndex, query_rules};

use super::text_utils::word_at_position;

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Span of the hovered word.
    pub span: Span,
}

/// Get hover information for a position.
///
/// Shows the first reachable rule matching the word under the cursor,
/// rendered as a fenced `ohm` block inside its owning grammar's namespace.
/// "First" is the caller-side most-specific convention: the document's own
/// rules come before referenced ones.
pub fn hover(index: &GrammarIndex, document: &Path, line: usize, col: usize) -> Option<HoverResult> {
    let text = index.text(document)?;
    let (word, span) = word_at_position(&text, line, col)?;

    let matches = query_rules(
        index,
        document,
        Some(&|r: &DecoratedRule| r.rule.name.text.as_ref() == word),
    );
    let rule = &matches.first()?.rule;

    let contents = format!(
        "```ohm\n{} {{\n  {}\n}}\n```",
        rule.owner.text, rule.source
    );
    Some(HoverResult { contents, span })
}
