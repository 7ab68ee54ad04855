//! Cross-file resolver.
//!
//! Walks a document's directive reference map, loading and parsing every
//! transitively referenced document that is not yet in the index. Loads are
//! awaited sequentially; reference graphs are small. A per-call visited set
//! makes the walk terminate on reference cycles of any length.
//!
//! A missing referenced file is non-fatal: that branch of the reachable rule
//! set simply stays empty.

use std::collections::VecDeque;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use rustc_hash::FxHashSet;

use super::grammar_index::GrammarIndex;
use super::loader::FileLoader;

/// Resolve a directive's relative path against the directory containing
/// `document`. Purely lexical; `.` and `..` components are folded without
/// touching the filesystem.
pub fn resolve_ref(document: &Path, relative: &str) -> PathBuf {
    let base = document.parent().unwrap_or_else(|| Path::new(""));
    normalize(base.join(relative))
}

fn normalize(path: PathBuf) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // Cannot go above the root; drop the component.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Make every document transitively referenced from `root` present in the
/// index.
///
/// Already-cached identities are skipped without re-reading: whatever enters
/// the index has its own references resolved at load time, so a cached
/// document's subgraph is already reachable. Newly loaded documents join the
/// worklist so their reference maps are walked in turn.
pub async fn ensure_reachable(index: &mut GrammarIndex, loader: &dyn FileLoader, root: &Path) {
    let mut visited: FxHashSet<PathBuf> = FxHashSet::default();
    let mut worklist: VecDeque<PathBuf> = VecDeque::new();
    worklist.push_back(root.to_path_buf());

    while let Some(document) = worklist.pop_front() {
        if !visited.insert(document.clone()) {
            continue;
        }

        let targets: Vec<PathBuf> = match index.refs(&document) {
            Some(refs) => refs
                .values()
                .map(|relative| resolve_ref(&document, relative))
                .collect(),
            None => continue,
        };

        for target in targets {
            if visited.contains(&target) || index.contains(&target) {
                trace!(document = %target.display(), "reference already cached");
                continue;
            }

            let stamp = index.version(&target);
            let bytes = match loader.read_file(&target).await {
                Ok(bytes) => bytes,
                Err(error) => {
                    debug!(
                        document = %target.display(),
                        error = %error,
                        "referenced grammar could not be read"
                    );
                    continue;
                }
            };
            let text = String::from_utf8_lossy(&bytes);

            if index.apply_loaded(&target, &text, stamp).is_some() {
                worklist.push_back(target);
            }
        }
    }
}
