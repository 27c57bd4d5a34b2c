// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Throwaway project directory built file by file
pub struct Project {
    dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write `content` to `rel`, creating parent directories
    pub fn file(self, rel: &str, content: &str) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Create an empty directory at `rel`
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(rel)).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
