//! Rule query engine tests: reachable-set union, decoration, predicates,
//! duplicate names, cycle termination, deletion.

use std::path::Path;

use ohmlang::index::{
    DecoratedRule, GrammarIndex, MemoryFileLoader, ensure_reachable, query_rules,
    reachable_documents,
};

fn a() -> &'static Path {
    Path::new("/grammars/a.ohm")
}

fn b() -> &'static Path {
    Path::new("/grammars/b.ohm")
}

async fn indexed(a_text: &str, files: &[(&str, &str)]) -> GrammarIndex {
    let mut loader = MemoryFileLoader::new();
    for (path, text) in files {
        loader.insert(*path, *text);
    }
    let mut index = GrammarIndex::new();
    index.refresh_from_content(a(), a_text, false);
    ensure_reachable(&mut index, &loader, a()).await;
    index
}

#[tokio::test]
async fn test_union_of_own_and_referenced_rules() {
    let index = indexed(
        "// @b => ./b.ohm\nA {\n  Start = Foo\n}\n",
        &[("/grammars/b.ohm", "B {\n  Foo = \"x\"\n}\n")],
    )
    .await;

    let rules = query_rules(&index, a(), None);
    let names: Vec<_> = rules
        .iter()
        .map(|r| (r.rule.name.text.as_ref(), r.document.as_path()))
        .collect();
    // Own rules first, then referenced documents in map-iteration order.
    assert_eq!(names, vec![("Start", a()), ("Foo", b())]);
}

#[tokio::test]
async fn test_decoration_carries_origin_and_owner() {
    let index = indexed(
        "// @b => ./b.ohm\nA {\n  Start = Foo\n}\n",
        &[("/grammars/b.ohm", "B {\n  Foo = \"x\"\n}\n")],
    )
    .await;

    let foo = query_rules(
        &index,
        a(),
        Some(&|r: &DecoratedRule| r.rule.name.text.as_ref() == "Foo"),
    );
    assert_eq!(foo.len(), 1);
    assert_eq!(foo[0].document, b());
    assert_eq!(foo[0].rule.owner.text.as_ref(), "B");
}

#[tokio::test]
async fn test_same_named_rules_are_not_deduplicated() {
    let index = indexed(
        "// @b => ./b.ohm\nA {\n  Foo = \"a\"\n}\n",
        &[("/grammars/b.ohm", "B {\n  Foo = \"b\"\n}\n")],
    )
    .await;

    let foo = query_rules(
        &index,
        a(),
        Some(&|r: &DecoratedRule| r.rule.name.text.as_ref() == "Foo"),
    );
    assert_eq!(foo.len(), 2);
    // The declaring document's rule comes first — "most specific" by
    // caller convention.
    assert_eq!(foo[0].document, a());
    assert_eq!(foo[1].document, b());
}

#[tokio::test]
async fn test_reference_cycle_terminates() {
    let index = indexed(
        "// @b => ./b.ohm\nA {\n  FromA = \"a\"\n}\n",
        &[(
            "/grammars/b.ohm",
            "// @a => ./a.ohm\nB {\n  FromB = \"b\"\n}\n",
        )],
    )
    .await;

    let rules = query_rules(&index, a(), None);
    let names: Vec<_> = rules.iter().map(|r| r.rule.name.text.as_ref()).collect();
    assert_eq!(names, vec!["FromA", "FromB"]);

    // And from the other side of the cycle.
    let rules = query_rules(&index, b(), None);
    let names: Vec<_> = rules.iter().map(|r| r.rule.name.text.as_ref()).collect();
    assert_eq!(names, vec!["FromB", "FromA"]);
}

#[tokio::test]
async fn test_predicate_filters_after_decoration() {
    let index = indexed(
        "// @b => ./b.ohm\nA {\n  Foo = \"a\"\n}\n",
        &[("/grammars/b.ohm", "B {\n  Foo = \"b\"\n}\n")],
    )
    .await;

    let only_b = query_rules(&index, a(), Some(&|r: &DecoratedRule| r.document == b()));
    assert_eq!(only_b.len(), 1);
    assert_eq!(only_b[0].rule.owner.text.as_ref(), "B");
}

#[tokio::test]
async fn test_deleted_reference_leaves_local_rules() {
    let mut index = indexed(
        "// @b => ./b.ohm\nA {\n  Own = \"x\"\n  Other = Own\n}\n",
        &[("/grammars/b.ohm", "B {\n  Foo = \"b\"\n}\n")],
    )
    .await;

    index.remove(b());
    assert!(index.grammar(b()).is_none());

    let rules = query_rules(&index, a(), None);
    let names: Vec<_> = rules.iter().map(|r| r.rule.name.text.as_ref()).collect();
    assert_eq!(names, vec!["Own", "Other"]);
}

#[tokio::test]
async fn test_reachable_documents_order() {
    let index = indexed(
        "// @b => ./b.ohm\n// @c => ./c.ohm\nA {\n}\n",
        &[
            ("/grammars/b.ohm", "B {\n}\n"),
            ("/grammars/c.ohm", "C {\n}\n"),
        ],
    )
    .await;

    let docs = reachable_documents(&index, a());
    assert_eq!(
        docs,
        vec![
            a().to_path_buf(),
            b().to_path_buf(),
            Path::new("/grammars/c.ohm").to_path_buf(),
        ]
    );
}

#[tokio::test]
async fn test_query_on_unknown_document_is_empty() {
    let index = GrammarIndex::new();
    assert!(query_rules(&index, Path::new("/nowhere.ohm"), None).is_empty());
}
