//! Shared helpers for integration tests.

#![allow(dead_code)]

use ohmlang::syntax::{Grammars, Ident, Seq, Term};
use ohmlang::{Position, Span};

/// Slice `text` at a line/column span, for byte-exact range assertions.
pub fn slice(text: &str, span: Span) -> String {
    let offset = |pos: Position| -> usize {
        let mut off = 0;
        for (i, line) in text.split('\n').enumerate() {
            if i == pos.line {
                return off + pos.column;
            }
            off += line.len() + 1;
        }
        panic!("line {} out of range", pos.line);
    };
    text[offset(span.start)..offset(span.end)].to_string()
}

/// Every identifier token in the model: rule names, application idents
/// (including inside nested argument sequences), grammar and super-grammar
/// names.
pub fn all_idents(ast: &Grammars) -> Vec<Ident> {
    let mut idents = Vec::new();
    for grammar in &ast.grammars {
        idents.push(grammar.ident.clone());
        if let Some(sup) = &grammar.super_grammar {
            idents.push(sup.name.clone());
        }
        for rule in &grammar.rules {
            idents.push(rule.name.clone());
            for seq in &rule.body {
                collect_seq_idents(seq, &mut idents);
            }
        }
    }
    idents
}

fn collect_seq_idents(seq: &Seq, out: &mut Vec<Ident>) {
    for term in &seq.terms {
        if let Term::Application { ident, args, .. } = term {
            out.push(ident.clone());
            for arg in args {
                collect_seq_idents(arg, out);
            }
        }
    }
}
