//! AST types for parsed grammar documents.
//!
//! A [`Grammars`] value is the root of one document's syntax model. It is
//! immutable by convention: an edit never mutates an existing value, it
//! produces a brand-new `Grammars` that atomically replaces the old one in
//! the index.

use std::sync::Arc;

use crate::base::Span;
use crate::parser::directives::RefMap;

/// An identifier token: its text and exact source range.
///
/// Slicing the source at `span` yields exactly `text`; identifiers never
/// span lines, so `span.end.column - span.start.column == text.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub text: Arc<str>,
    pub span: Span,
}

impl Ident {
    pub fn new(text: impl Into<Arc<str>>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Root of a parsed document: its grammar declarations plus the reference
/// map extracted from `// @name => path` directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammars {
    pub grammars: Vec<Grammar>,
    pub refs: RefMap,
}

impl Grammars {
    /// Iterate over every rule of every grammar, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.grammars.iter().flat_map(|g| g.rules.iter())
    }
}

/// One named rule-set declaration within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub ident: Ident,
    pub super_grammar: Option<SuperGrammar>,
    pub rules: Vec<Rule>,
    pub span: Span,
}

/// The parent grammar a [`Grammar`] extends: `<: Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperGrammar {
    pub name: Ident,
    pub span: Span,
}

/// A named production composed of one or more alternative sequences.
///
/// `owner` is the name token of the enclosing grammar, set once at
/// construction and never changed; queries recover a rule's namespace from
/// it without re-walking the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: Ident,
    /// Formal parameter names, e.g. `ListOf<elem, sep>`.
    pub formals: Vec<Ident>,
    /// Parenthesized description text, e.g. `exp (an expression) = ...`.
    pub description: Option<Arc<str>>,
    /// Alternative bodies, one `Seq` per `|`-separated alternative.
    pub body: Vec<Seq>,
    /// Name token of the owning grammar. Immutable after construction.
    pub owner: Ident,
    pub span: Span,
    /// The rule's matched source text, used for hover/completion docs.
    pub source: Arc<str>,
}

/// One alternative: an ordered list of terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seq {
    pub terms: Vec<Term>,
    pub span: Span,
}

/// One element of a sequence.
///
/// Only `Application` carries an identifier; the other variants are opaque
/// leaves as far as cross-file queries are concerned (group interiors are
/// parsed for span accuracy but not retained).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A rule reference, optionally with argument sequences: `ListOf<x, ",">`.
    Application {
        ident: Ident,
        args: Vec<Seq>,
        span: Span,
    },
    /// A parenthesized group: `("a" | "b")`.
    Group { span: Span },
    /// A character range: `"a".."z"`.
    Range { span: Span },
    /// A literal terminal: `"while"`.
    Terminal { span: Span },
}

impl Term {
    pub fn span(&self) -> Span {
        match self {
            Term::Application { span, .. }
            | Term::Group { span }
            | Term::Range { span }
            | Term::Terminal { span } => *span,
        }
    }

    /// The application identifier, if this term is an application.
    pub fn ident(&self) -> Option<&Ident> {
        match self {
            Term::Application { ident, .. } => Some(ident),
            _ => None,
        }
    }
}
