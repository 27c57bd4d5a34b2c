// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::domain::{ManifestKind, ScanResult, WORKFLOWS_DIR};
use crate::error::{Error, Result};
use crate::services::parsers::is_workflow_file;

pub struct ProjectScanner;

impl ProjectScanner {
    /// Report which manifest kinds exist under `dir` without reading them.
    pub fn scan(dir: &Path) -> Result<ScanResult> {
        let names = Self::list(dir)?;

        let mut found: ScanResult = ManifestKind::ALL
            .into_iter()
            .filter(|k| *k != ManifestKind::GithubActions)
            .filter(|k| names.contains(k.relative_path()))
            .collect();

        if Self::has_workflows(&dir.join(WORKFLOWS_DIR))? {
            found.insert(ManifestKind::GithubActions);
        }

        debug!(dir = %dir.display(), found = found.len(), "project scanned");
        Ok(found)
    }

    fn list(dir: &Path) -> Result<HashSet<String>> {
        let scan_err = |source| Error::Scan {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = HashSet::new();
        for entry in std::fs::read_dir(dir).map_err(scan_err)? {
            let entry = entry.map_err(scan_err)?;
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    /// An existing but empty workflows directory does not count
    fn has_workflows(workflows: &Path) -> Result<bool> {
        if !workflows.is_dir() {
            return Ok(false);
        }

        let scan_err = |source| Error::Scan {
            path: workflows.to_path_buf(),
            source,
        };

        for entry in std::fs::read_dir(workflows).map_err(scan_err)? {
            let entry = entry.map_err(scan_err)?;
            if !is_workflow_file(&entry.file_name().to_string_lossy()) {
                continue;
            }
            if std::fs::metadata(entry.path()).map_err(scan_err)?.is_file() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
