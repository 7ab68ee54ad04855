//! Rule query engine.
//!
//! Answers "all rules reachable from document X": the document's own rules
//! unioned with the rules of every transitively referenced document, each
//! decorated with its originating document identity. Same-named rules from
//! different documents are all returned — callers treat the first as most
//! specific by convention, not by engine guarantee.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::syntax::Rule;

use super::grammar_index::GrammarIndex;
use super::resolver::resolve_ref;

/// A rule decorated with the identity of the document that declares it.
///
/// The rule itself still carries its immutable owning-grammar back-reference
/// (`rule.owner`); the document identity is the second coordinate of a
/// rule's namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedRule {
    pub rule: Rule,
    pub document: PathBuf,
}

/// Predicate over decorated rules, applied after decoration.
pub type RulePredicate<'a> = &'a dyn Fn(&DecoratedRule) -> bool;

/// Enumerate all rules reachable from `root`, optionally filtered.
///
/// Traversal is depth-first: a document's own rules first (in declaration
/// order), then each entry of its reference map in map-iteration order. A
/// visited set scoped to this call terminates reference cycles.
pub fn query_rules(
    index: &GrammarIndex,
    root: &Path,
    predicate: Option<RulePredicate<'_>>,
) -> Vec<DecoratedRule> {
    let mut visited = FxHashSet::default();
    let mut rules = Vec::new();
    collect_rules(index, root, predicate, &mut visited, &mut rules);
    rules
}

fn collect_rules(
    index: &GrammarIndex,
    document: &Path,
    predicate: Option<RulePredicate<'_>>,
    visited: &mut FxHashSet<PathBuf>,
    out: &mut Vec<DecoratedRule>,
) {
    if !visited.insert(document.to_path_buf()) {
        return;
    }

    if let Some(ast) = index.grammar(document) {
        for rule in ast.rules() {
            let decorated = DecoratedRule {
                rule: rule.clone(),
                document: document.to_path_buf(),
            };
            if predicate.is_none_or(|p| p(&decorated)) {
                out.push(decorated);
            }
        }
    }

    // The reference map is tracked independently of parse success, so a
    // broken document still exposes its referenced rules.
    let targets: Vec<PathBuf> = match index.refs(document) {
        Some(refs) => refs
            .values()
            .map(|relative| resolve_ref(document, relative))
            .collect(),
        None => return,
    };
    for target in targets {
        collect_rules(index, &target, predicate, visited, out);
    }
}

/// The reachable document set of `root`, in the same depth-first order
/// `query_rules` visits it. Includes identities with no index entry.
pub fn reachable_documents(index: &GrammarIndex, root: &Path) -> Vec<PathBuf> {
    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    collect_documents(index, root, &mut visited, &mut order);
    order
}

fn collect_documents(
    index: &GrammarIndex,
    document: &Path,
    visited: &mut FxHashSet<PathBuf>,
    out: &mut Vec<PathBuf>,
) {
    if !visited.insert(document.to_path_buf()) {
        return;
    }
    out.push(document.to_path_buf());

    let targets: Vec<PathBuf> = match index.refs(document) {
        Some(refs) => refs
            .values()
            .map(|relative| resolve_ref(document, relative))
            .collect(),
        None => return,
    };
    for target in targets {
        collect_documents(index, &target, visited, out);
    }
}
