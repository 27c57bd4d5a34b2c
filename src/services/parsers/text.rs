// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::Path;

use super::ManifestParser;
use crate::domain::{ManifestKind, Parsed};
use crate::error::Result;
use crate::services::fs::read_manifest;

/// Passes a manifest through as raw text (requirements.txt, pom.xml, ...)
pub struct TextManifestParser {
    kind: ManifestKind,
}

impl TextManifestParser {
    pub fn new(kind: ManifestKind) -> Self {
        Self { kind }
    }
}

impl ManifestParser for TextManifestParser {
    type Output = Parsed<String>;

    fn kind(&self) -> ManifestKind {
        self.kind
    }

    fn parse(&self, root: &Path) -> Result<Self::Output> {
        Ok(read_manifest(&root.join(self.kind.relative_path()))?.into())
    }
}
