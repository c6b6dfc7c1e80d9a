//! Temporary directory holding PNG inputs and generated outputs.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures;

/// Scratch directory removed when dropped
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an 8-bit RGB PNG built from `f(x, y)`
    pub fn write_rgb_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        f: impl Fn(u32, u32) -> [u8; 3],
    ) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, fixtures::encode_rgb_png(width, height, f))
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write arbitrary bytes (e.g. a corrupt image)
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    pub fn read_to_string(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read output")
    }
}
