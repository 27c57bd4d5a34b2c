// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Ecosystem, Parsed};

/// Top-level object of a `package.json`, keys kept in file order.
///
/// Only well-known keys are probed; anything else is carried untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PackageManifest(pub Map<String, Value>);

impl PackageManifest {
    /// Declared package name, verbatim, if it is a non-blank string
    pub fn name(&self) -> Option<&str> {
        self.0
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.trim().is_empty())
    }

    pub fn dependencies(&self) -> Option<&Map<String, Value>> {
        self.0.get("dependencies").and_then(Value::as_object)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_pretty_json(&self) -> String {
        // Map<String, Value> always serializes
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Upper-cased instruction keyword (`FROM`, `RUN`, ...)
    pub keyword: String,
    /// Arguments with line continuations joined
    pub arguments: String,
    /// 1-based line where the instruction starts
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dockerfile {
    pub instructions: Vec<Instruction>,
}

impl Dockerfile {
    pub fn base_images(&self) -> Vec<&str> {
        self.instructions
            .iter()
            .filter(|i| i.keyword == "FROM")
            .filter_map(|i| {
                i.arguments
                    .split_whitespace()
                    .find(|arg| !arg.starts_with("--"))
            })
            .collect()
    }
}

impl fmt::Display for Dockerfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, instr) in self.instructions.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            if instr.arguments.is_empty() {
                write!(f, "{}", instr.keyword)?;
            } else {
                write!(f, "{} {}", instr.keyword, instr.arguments)?;
            }
        }
        Ok(())
    }
}

/// One GitHub Actions workflow file
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    pub file_name: String,
    pub document: Value,
}

/// Everything the parsers found in one project root.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProjectRecord {
    pub package_json: Parsed<PackageManifest>,
    pub dockerfile: Parsed<Dockerfile>,
    pub workflows: Vec<Workflow>,
    pub requirements_txt: Parsed<String>,
    pub pom_xml: Parsed<String>,
    pub gemfile: Parsed<String>,
    pub go_mod: Parsed<String>,
    pub docker_compose: Parsed<String>,
}

impl ParsedProjectRecord {
    /// Ecosystems implied by the non-absent manifests, in priority order.
    /// An empty `package.json` object does not count as a Node.js signal.
    pub fn detected_languages(&self) -> Vec<Ecosystem> {
        Ecosystem::PRIORITY
            .into_iter()
            .filter(|eco| match eco {
                Ecosystem::Node => matches!(
                    &self.package_json,
                    Parsed::Present(pkg) if !pkg.is_empty()
                ),
                Ecosystem::Python => self.requirements_txt.is_present(),
                Ecosystem::Maven => self.pom_xml.is_present(),
                Ecosystem::Ruby => self.gemfile.is_present(),
                Ecosystem::Go => self.go_mod.is_present(),
            })
            .collect()
    }

    /// Canonical text form of the workflow list: a pretty JSON array of documents
    pub fn workflows_json(&self) -> String {
        let docs: Vec<&Value> = self.workflows.iter().map(|w| &w.document).collect();
        serde_json::to_string_pretty(&docs).unwrap_or_else(|_| "[]".into())
    }
}
