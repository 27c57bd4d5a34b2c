// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::{ManifestParser, is_workflow_file};
use crate::domain::{ManifestKind, Workflow};
use crate::error::{Error, Result};
use crate::services::fs::read_manifest;

pub struct WorkflowsParser;

impl ManifestParser for WorkflowsParser {
    type Output = Vec<Workflow>;

    fn kind(&self) -> ManifestKind {
        ManifestKind::GithubActions
    }

    /// A project without a workflows directory simply has no workflows.
    fn parse(&self, root: &Path) -> Result<Self::Output> {
        let dir = root.join(self.kind().relative_path());

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %dir.display(), "no workflows directory");
                return Ok(Vec::new());
            }
            Err(source) => return Err(Error::FileRead { path: dir, source }),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::FileRead {
                path: dir.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_workflow_file(&name) {
                continue;
            }
            // Follows symlinks; a dangling link is a read failure, not a skip
            let path = entry.path();
            let metadata = std::fs::metadata(&path)
                .map_err(|source| Error::FileRead { path, source })?;
            if metadata.is_file() {
                names.push(name);
            }
        }
        // read_dir order is platform-defined
        names.sort();

        let mut workflows = Vec::with_capacity(names.len());
        for file_name in names {
            let path = dir.join(&file_name);
            // Removed between listing and reading: treat like it was never there
            let Some(content) = read_manifest(&path)? else {
                continue;
            };
            let document: Value =
                serde_yaml::from_str(&content).map_err(|e| Error::MalformedManifest {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            workflows.push(Workflow {
                file_name,
                document,
            });
        }

        debug!(count = workflows.len(), "workflows parsed");
        Ok(workflows)
    }
}
