// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::Path;

use tracing::debug;

use crate::domain::{ManifestKind, ParsedProjectRecord};
use crate::error::Result;
use crate::services::parsers::{
    DockerfileParser, ManifestParser, PackageJsonParser, TextManifestParser, WorkflowsParser,
};

/// Order in which `parse_all` runs the parsers.
/// Only decides which fatal error surfaces first.
pub const PARSE_ORDER: [ManifestKind; 8] = [
    ManifestKind::PackageJson,
    ManifestKind::Dockerfile,
    ManifestKind::GithubActions,
    ManifestKind::RequirementsTxt,
    ManifestKind::PomXml,
    ManifestKind::Gemfile,
    ManifestKind::GoMod,
    ManifestKind::DockerCompose,
];

pub struct ParserManager {
    package_json: PackageJsonParser,
    dockerfile: DockerfileParser,
    workflows: WorkflowsParser,
    requirements_txt: TextManifestParser,
    pom_xml: TextManifestParser,
    gemfile: TextManifestParser,
    go_mod: TextManifestParser,
    docker_compose: TextManifestParser,
}

impl Default for ParserManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserManager {
    pub fn new() -> Self {
        Self {
            package_json: PackageJsonParser,
            dockerfile: DockerfileParser,
            workflows: WorkflowsParser,
            requirements_txt: TextManifestParser::new(ManifestKind::RequirementsTxt),
            pom_xml: TextManifestParser::new(ManifestKind::PomXml),
            gemfile: TextManifestParser::new(ManifestKind::Gemfile),
            go_mod: TextManifestParser::new(ManifestKind::GoMod),
            docker_compose: TextManifestParser::new(ManifestKind::DockerCompose),
        }
    }

    /// Run every parser once against `root`.
    ///
    /// Missing manifests end up as absent fields; the first real I/O or
    /// parse failure aborts the whole record.
    pub fn parse_all(&self, root: &Path) -> Result<ParsedProjectRecord> {
        debug!(root = %root.display(), "parsing project manifests");

        // Field order below follows PARSE_ORDER
        let record = ParsedProjectRecord {
            package_json: self.package_json.parse(root)?,
            dockerfile: self.dockerfile.parse(root)?,
            workflows: self.workflows.parse(root)?,
            requirements_txt: self.requirements_txt.parse(root)?,
            pom_xml: self.pom_xml.parse(root)?,
            gemfile: self.gemfile.parse(root)?,
            go_mod: self.go_mod.parse(root)?,
            docker_compose: self.docker_compose.parse(root)?,
        };

        debug!(
            package_json = record.package_json.is_present(),
            dockerfile = record.dockerfile.is_present(),
            workflows = record.workflows.len(),
            "manifests parsed"
        );
        Ok(record)
    }
}
