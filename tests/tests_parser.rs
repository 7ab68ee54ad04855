//! AST builder tests: structure, exact source ranges, back-references.

mod helpers;

use helpers::{all_idents, slice};
use ohmlang::parser::parse_grammars;
use ohmlang::syntax::Term;
use rstest::rstest;

const ARITHMETIC: &str = "\
Arithmetic {
  Exp = AddExp
  AddExp = AddExp \"+\" MulExp -- plus
         | MulExp
  MulExp = digit+
}
";

#[test]
fn test_basic_structure() {
    let ast = parse_grammars(ARITHMETIC).unwrap();
    assert_eq!(ast.grammars.len(), 1);

    let grammar = &ast.grammars[0];
    assert_eq!(grammar.ident.text.as_ref(), "Arithmetic");
    assert!(grammar.super_grammar.is_none());

    let names: Vec<_> = grammar.rules.iter().map(|r| r.name.text.as_ref()).collect();
    assert_eq!(names, vec!["Exp", "AddExp", "MulExp"]);
}

#[test]
fn test_rule_owner_back_reference() {
    let ast = parse_grammars(ARITHMETIC).unwrap();
    for rule in ast.rules() {
        assert_eq!(rule.owner.text.as_ref(), "Arithmetic");
        assert_eq!(rule.owner.span, ast.grammars[0].ident.span);
    }
}

#[test]
fn test_alternatives_and_case_names() {
    let ast = parse_grammars(ARITHMETIC).unwrap();
    let add_exp = &ast.grammars[0].rules[1];
    // `-- plus` tags the first alternative but does not create a term.
    assert_eq!(add_exp.body.len(), 2);
    assert_eq!(add_exp.body[0].terms.len(), 3);
    assert_eq!(add_exp.body[1].terms.len(), 1);
}

#[rstest]
#[case(ARITHMETIC)]
#[case("G {\n  a = b c d\n  b = \"x\"\n}\n")]
#[case("Lists {\n  Pair<x, y> = ListOf<x, \",\"> y\n}\n")]
#[case("A {\n}\nB <: A {\n  start = letter*\n}\n")]
fn test_ident_spans_are_byte_exact(#[case] source: &str) {
    let ast = parse_grammars(source).unwrap();
    let idents = all_idents(&ast);
    assert!(!idents.is_empty());
    for ident in idents {
        assert_eq!(
            slice(source, ident.span),
            ident.text.as_ref(),
            "span of `{}` does not cover its text",
            ident.text
        );
    }
}

#[test]
fn test_rule_name_span_length_equals_text_length() {
    let ast = parse_grammars(ARITHMETIC).unwrap();
    for rule in ast.rules() {
        let span = rule.name.span;
        assert_eq!(span.start.line, span.end.line);
        assert_eq!(span.end.column - span.start.column, rule.name.text.len());
    }
}

#[test]
fn test_super_grammar() {
    let source = "Extended <: Base {\n  more = \"x\"\n}\n";
    let ast = parse_grammars(source).unwrap();
    let sup = ast.grammars[0].super_grammar.as_ref().unwrap();
    assert_eq!(sup.name.text.as_ref(), "Base");
    assert_eq!(slice(source, sup.span), "<: Base");
}

#[test]
fn test_rule_description() {
    let source = "G {\n  exp (an arithmetic expression) = digit\n}\n";
    let ast = parse_grammars(source).unwrap();
    let rule = &ast.grammars[0].rules[0];
    assert_eq!(
        rule.description.as_deref(),
        Some("an arithmetic expression")
    );
    assert_eq!(rule.body.len(), 1);
}

#[test]
fn test_formals() {
    let source = "G {\n  Pair<x, y> = x y\n}\n";
    let ast = parse_grammars(source).unwrap();
    let rule = &ast.grammars[0].rules[0];
    let formals: Vec<_> = rule.formals.iter().map(|f| f.text.as_ref()).collect();
    assert_eq!(formals, vec!["x", "y"]);
}

#[test]
fn test_term_variants() {
    let source = "G {\n  char = \"a\"..\"z\" | \"x\" | (\"y\" \"z\")+ | digit\n}\n";
    let ast = parse_grammars(source).unwrap();
    let body = &ast.grammars[0].rules[0].body;
    assert_eq!(body.len(), 4);
    assert!(matches!(body[0].terms[0], Term::Range { .. }));
    assert!(matches!(body[1].terms[0], Term::Terminal { .. }));
    assert!(matches!(body[2].terms[0], Term::Group { .. }));
    assert!(matches!(body[3].terms[0], Term::Application { .. }));
}

#[test]
fn test_application_arguments_are_nested_sequences() {
    let source = "G {\n  List = ListOf<elem \"!\", \",\">\n  elem = letter\n}\n";
    let ast = parse_grammars(source).unwrap();
    let Term::Application { ident, args, .. } = &ast.grammars[0].rules[0].body[0].terms[0] else {
        panic!("expected an application");
    };
    assert_eq!(ident.text.as_ref(), "ListOf");
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].terms.len(), 2);
}

#[test]
fn test_rule_source_text() {
    let ast = parse_grammars(ARITHMETIC).unwrap();
    let mul_exp = &ast.grammars[0].rules[2];
    assert_eq!(mul_exp.source.as_ref(), "MulExp = digit+");
}

#[test]
fn test_multiple_grammars_in_one_document() {
    let source = "A {\n  a = \"a\"\n}\nB {\n  b = \"b\"\n}\n";
    let ast = parse_grammars(source).unwrap();
    assert_eq!(ast.grammars.len(), 2);
    assert_eq!(ast.grammars[1].rules[0].owner.text.as_ref(), "B");
}

#[test]
fn test_empty_alternative() {
    let source = "G {\n  opt = \"x\" |\n  other = \"y\"\n}\n";
    let ast = parse_grammars(source).unwrap();
    let opt = &ast.grammars[0].rules[0];
    assert_eq!(opt.body.len(), 2);
    assert!(opt.body[1].terms.is_empty());
}

#[test]
fn test_directives_populate_ref_map() {
    let source = "// @math => ./math.ohm\n// @lists => ../lists.ohm\nG {\n  x = \"x\"\n}\n";
    let ast = parse_grammars(source).unwrap();
    assert_eq!(ast.refs.len(), 2);
    assert_eq!(ast.refs.get("math").map(String::as_str), Some("./math.ohm"));
    assert_eq!(
        ast.refs.get("lists").map(String::as_str),
        Some("../lists.ohm")
    );
}

#[test]
fn test_parse_failure_reports_location() {
    let source = "G {\n  exp = (\n";
    let err = parse_grammars(source).unwrap_err();
    assert!(err.message.contains("expected"));
    // Failure at end of input: line 2, column 0 (the text ends with a newline).
    assert_eq!(err.span.start.line, 2);
    assert_eq!(err.span.start.column, 0);
}

#[test]
fn test_parse_failure_on_bad_token() {
    let source = "G {\n  exp = %\n}\n";
    let err = parse_grammars(source).unwrap_err();
    assert_eq!(err.span.start.line, 1);
    assert_eq!(err.span.start.column, 8);
}

#[test]
fn test_deterministic() {
    let a = parse_grammars(ARITHMETIC).unwrap();
    let b = parse_grammars(ARITHMETIC).unwrap();
    assert_eq!(a, b);
}
