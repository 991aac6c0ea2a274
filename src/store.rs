//! Filesystem primitives behind the matcher.
//!
//! The matcher never touches `std::fs` directly; it goes through the [`Store`]
//! trait so the decision table can be exercised without a real filesystem.
//! [`DiskStore`] is the production implementation, [`MemoryStore`] the test
//! double.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{Content, ReadMode};
use crate::errors::MatchError;

/// Read/write/exists primitive for reference files.
///
/// `write` creates missing parent directories. All operations surface I/O
/// failures as [`MatchError::Io`], which is fatal to the assertion.
pub trait Store {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path, mode: ReadMode) -> Result<Content, MatchError>;
    fn write(&self, path: &Path, content: &Content) -> Result<(), MatchError>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl Store for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path, mode: ReadMode) -> Result<Content, MatchError> {
        match mode {
            ReadMode::Text => fs::read_to_string(path)
                .map(Content::Text)
                .map_err(|e| MatchError::io(path, e)),
            ReadMode::Binary => fs::read(path)
                .map(Content::Binary)
                .map_err(|e| MatchError::io(path, e)),
        }
    }

    fn write(&self, path: &Path, content: &Content) -> Result<(), MatchError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| MatchError::io(parent, e))?;
        }
        fs::write(path, content.as_bytes()).map_err(|e| MatchError::io(path, e))
    }
}

/// In-memory store for unit tests.
///
/// Tracks how many writes occurred so tests can assert on the
/// at-most-one-write invariant.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file without counting it as a matcher-initiated write.
    pub fn seed(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), bytes.into());
    }

    pub fn bytes(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Store for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path, mode: ReadMode) -> Result<Content, MatchError> {
        let files = self.files.borrow();
        let bytes = files.get(path).ok_or_else(|| {
            MatchError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })?;
        match mode {
            ReadMode::Binary => Ok(Content::Binary(bytes.clone())),
            ReadMode::Text => String::from_utf8(bytes.clone())
                .map(Content::Text)
                .map_err(|e| {
                    MatchError::io(
                        path,
                        std::io::Error::new(std::io::ErrorKind::InvalidData, e),
                    )
                }),
        }
    }

    fn write(&self, path: &Path, content: &Content) -> Result<(), MatchError> {
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_text() {
        let store = MemoryStore::new();
        let path = Path::new("a/b.snap");
        store.write(path, &Content::from("hello\n")).unwrap();
        assert!(store.exists(path));
        assert_eq!(
            store.read(path, ReadMode::Text).unwrap(),
            Content::from("hello\n")
        );
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn memory_store_read_missing_is_io_error() {
        let store = MemoryStore::new();
        let err = store
            .read(Path::new("missing"), ReadMode::Binary)
            .unwrap_err();
        assert_eq!(err.code_str(), "matchfile::store::io");
    }

    #[test]
    fn seeding_does_not_count_as_write() {
        let store = MemoryStore::new();
        store.seed("x", b"1".to_vec());
        assert!(store.exists(Path::new("x")));
        assert_eq!(store.write_count(), 0);
    }
}
