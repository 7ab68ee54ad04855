//! Reference directive scanner.
//!
//! The grammar language has no native import syntax; cross-file linkage is a
//! comment-layered convention instead. A line containing
//!
//! ```text
//! // @name => relative/path.ohm
//! ```
//!
//! declares that `name` (as used in a super-grammar position or query) lives
//! in the document at `relative/path.ohm`, resolved against the declaring
//! document's directory.
//!
//! The scan works on raw text, independent of parse success, so dependency
//! metadata can still be extracted from a document that currently fails to
//! parse.

use std::sync::Arc;

use indexmap::IndexMap;

/// Alias → relative-path mapping declared by a document's directives.
///
/// Insertion order is iteration order; a repeated alias keeps its first
/// position but the last directive's path wins.
pub type RefMap = IndexMap<Arc<str>, String>;

/// Scan `text` for `// @name => path` directives.
pub fn scan_directives(text: &str) -> RefMap {
    let mut refs = RefMap::new();
    for line in text.lines() {
        if let Some((name, path)) = scan_line(line) {
            refs.insert(Arc::from(name), path.to_string());
        }
    }
    refs
}

/// Match one line against `// @<name> => <path>`. The directive may sit after
/// other content on the line; the path is the trimmed line remainder.
fn scan_line(line: &str) -> Option<(&str, &str)> {
    let comment_start = line.find("//")?;
    let rest = &line[comment_start + 2..];

    // At least one whitespace character between `//` and `@`.
    let after_ws = rest.trim_start();
    if after_ws.len() == rest.len() {
        return None;
    }

    let after_at = after_ws.strip_prefix('@')?;
    let name_len = after_at
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if name_len == 0 {
        return None;
    }
    let (name, rest) = after_at.split_at(name_len);

    let path = rest.trim_start().strip_prefix("=>")?.trim();
    if path.is_empty() {
        return None;
    }

    Some((name, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_directive() {
        let refs = scan_directives("// @math => ./math.ohm\nG {}\n");
        assert_eq!(refs.get("math").map(String::as_str), Some("./math.ohm"));
    }

    #[test]
    fn test_path_is_trimmed() {
        let refs = scan_directives("// @base =>   ../lib/base.ohm   ");
        assert_eq!(refs.get("base").map(String::as_str), Some("../lib/base.ohm"));
    }

    #[test]
    fn test_last_directive_wins() {
        let refs = scan_directives("// @m => ./a.ohm\n// @m => ./b.ohm\n");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs.get("m").map(String::as_str), Some("./b.ohm"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let refs = scan_directives("// @b => ./b.ohm\n// @a => ./a.ohm\n");
        let names: Vec<_> = refs.keys().map(|k| k.as_ref()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_requires_space_after_slashes() {
        assert!(scan_directives("//@m => ./a.ohm").is_empty());
    }

    #[test]
    fn test_ignores_plain_comments_and_arrows() {
        assert!(scan_directives("// just a comment\n// @name no arrow\n").is_empty());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(scan_directives("// @m =>   ").is_empty());
    }

    #[test]
    fn test_scans_broken_document() {
        // The rest of the file is nowhere near valid grammar syntax.
        let refs = scan_directives("%%%%\n// @dep => ./dep.ohm\n{{{{");
        assert_eq!(refs.len(), 1);
    }
}
