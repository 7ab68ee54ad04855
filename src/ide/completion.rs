//! Completion implementation.
//!
//! Offers every reachable rule plus the language's built-in rules, with the
//! built-ins suppressed when a declared rule shadows them.

use std::path::Path;

use crate::index::{GrammarIndex, query_rules};

/// Kind of a completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    /// A rule declared in a reachable grammar document.
    Rule,
    /// A built-in rule of the language.
    Builtin,
}

/// A single completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    /// Rule source text, or the built-in's documentation.
    pub documentation: Option<String>,
}

/// A built-in rule available in every grammar.
struct BuiltinRule {
    label: &'static str,
    documentation: Option<&'static str>,
}

/// Built-in rules, per the language's syntax reference.
const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        label: "letter",
        documentation: Some(
            "Matches a single character which is a letter (either uppercase or lowercase).",
        ),
    },
    BuiltinRule {
        label: "lower",
        documentation: Some("Matches a single lowercase letter."),
    },
    BuiltinRule {
        label: "upper",
        documentation: Some("Matches a single uppercase letter."),
    },
    BuiltinRule {
        label: "digit",
        documentation: Some("Matches a single character which is a digit from 0 to 9."),
    },
    BuiltinRule {
        label: "hexDigit",
        documentation: Some(
            "Matches a single character which is a either digit or a letter from A-F.",
        ),
    },
    BuiltinRule {
        label: "alnum",
        documentation: Some("Matches a single letter or digit; equivalent to `letter | digit`."),
    },
    BuiltinRule {
        label: "space",
        documentation: Some(
            "Matches a single whitespace character (e.g., space, tab, newline, etc.)",
        ),
    },
    BuiltinRule {
        label: "end",
        documentation: Some("Matches the end of the input stream. Equivalent to ~any."),
    },
    BuiltinRule {
        label: "ListOf",
        documentation: None,
    },
    BuiltinRule {
        label: "EmptyListOf",
        documentation: None,
    },
    BuiltinRule {
        label: "NonemptyListOf",
        documentation: None,
    },
    BuiltinRule {
        label: "listOf",
        documentation: None,
    },
    BuiltinRule {
        label: "emptyListOf",
        documentation: None,
    },
    BuiltinRule {
        label: "nonemptyListOf",
        documentation: None,
    },
    BuiltinRule {
        label: "applySyntactic",
        documentation: None,
    },
    BuiltinRule {
        label: "caseInsensitive",
        documentation: None,
    },
];

/// Completion items for a document: reachable rules, then built-ins.
pub fn completions(index: &GrammarIndex, document: &Path) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = query_rules(index, document, None)
        .into_iter()
        .map(|decorated| CompletionItem {
            label: decorated.rule.name.text.to_string(),
            kind: CompletionKind::Rule,
            documentation: Some(decorated.rule.source.to_string()),
        })
        .collect();

    for builtin in BUILTIN_RULES {
        if items.iter().any(|item| item.label == builtin.label) {
            continue;
        }
        items.push(CompletionItem {
            label: builtin.label.to_string(),
            kind: CompletionKind::Builtin,
            documentation: builtin.documentation.map(str::to_string),
        });
    }

    items
}
