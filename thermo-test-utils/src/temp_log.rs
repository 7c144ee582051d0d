// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory holding the log files of one test.
///
/// Removed with everything in it when dropped.
#[derive(Debug)]
pub struct TempLogDir {
    dir: TempDir,
}

impl TempLogDir {
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp log dir"),
        }
    }

    /// Path of `name` inside the directory. The file is not created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Path whose parent directory does not exist, so it cannot be opened.
    pub fn unwritable_path(&self, name: &str) -> PathBuf {
        self.dir.path().join("missing").join("nested").join(name)
    }

    /// Contents of `name`, empty if it does not exist.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap_or_default()
    }

    /// Lines of `name` without their terminators.
    pub fn lines(&self, name: &str) -> Vec<String> {
        self.read(name).lines().map(str::to_owned).collect()
    }

    /// Whether `name` has been created in the directory.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}

impl Default for TempLogDir {
    fn default() -> Self {
        Self::new()
    }
}
