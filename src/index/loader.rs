//! File content collaborator for cross-file resolution.
//!
//! The resolver only needs `readFile(id) -> bytes`; everything else about
//! the host's document model stays outside the core. Two implementations:
//! the real filesystem (tokio) and an in-memory map for tests and embedded
//! hosts.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rustc_hash::FxHashMap;

/// Asynchronous file content provider.
#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Read the raw bytes of the document at `path`.
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Loads documents from the filesystem.
#[derive(Debug, Default)]
pub struct FsFileLoader;

#[async_trait]
impl FileLoader for FsFileLoader {
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// In-memory loader keyed by path. Missing entries report `NotFound`.
#[derive(Debug, Default)]
pub struct MemoryFileLoader {
    files: FxHashMap<PathBuf, String>,
}

impl MemoryFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

#[async_trait]
impl FileLoader for MemoryFileLoader {
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .map(|text| text.as_bytes().to_vec())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("{}", path.display()))
            })
    }
}
