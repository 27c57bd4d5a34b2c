// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::Path;
use std::sync::LazyLock;

use globset::{Glob, GlobMatcher};

use crate::domain::ManifestKind;
use crate::error::Result;

pub mod dockerfile;
pub mod package_json;
pub mod text;
pub mod workflows;

pub use dockerfile::DockerfileParser;
pub use package_json::PackageJsonParser;
pub use text::TextManifestParser;
pub use workflows::WorkflowsParser;

/// Parses one manifest kind out of a project root.
///
/// A missing file is reported through `Output`, never as an error.
pub trait ManifestParser {
    type Output;

    fn kind(&self) -> ManifestKind;

    fn parse(&self, root: &Path) -> Result<Self::Output>;
}

static WORKFLOW_FILE: LazyLock<GlobMatcher> = LazyLock::new(|| {
    Glob::new("*.{yml,yaml}")
        .expect("static workflow glob is valid")
        .compile_matcher()
});

/// Whether a file name carries a GitHub Actions workflow extension
pub fn is_workflow_file(file_name: &str) -> bool {
    WORKFLOW_FILE.is_match(file_name)
}
