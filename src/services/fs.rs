// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read a manifest as UTF-8 text.
///
/// A missing file is `Ok(None)`. Every other failure, including a directory
/// sitting where the file should be, is `Error::FileRead`.
pub fn read_manifest(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "manifest read");
            Ok(Some(content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "manifest absent");
            Ok(None)
        }
        Err(source) => Err(Error::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
