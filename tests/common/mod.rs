//! Shared helpers for disk-backed integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use matchfile::{Reporter, TestContext, UpdatePolicy};
use tempfile::TempDir;

/// A throwaway project directory with a fake test file, so derived default
/// paths land inside the sandbox.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create sandbox dir");
        fs::write(dir.path().join("output_test.rs"), "// fake test file")
            .expect("seed fake test file");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn context(&self, test_name: &str, policy: UpdatePolicy) -> TestContext {
        let mut ctx = TestContext::new(self.root().join("output_test.rs"), test_name, policy);
        // Stable message text regardless of where the tests run.
        ctx.set_reporter(Reporter::plain());
        ctx
    }

    /// Path inside the sandbox's derived snapshot directory.
    pub fn snapshot_path(&self, file_name: &str) -> PathBuf {
        self.root().join("__file_snapshots__").join(file_name)
    }

    pub fn read(&self, path: &Path) -> Vec<u8> {
        fs::read(path).expect("read reference file")
    }

    pub fn write(&self, path: &Path, bytes: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create reference dir");
        }
        fs::write(path, bytes).expect("write reference file");
    }
}
