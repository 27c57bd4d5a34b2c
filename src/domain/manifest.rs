// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::collections::BTreeSet;
use std::fmt;

/// Directory holding GitHub Actions workflow files, relative to the project root
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Recognized manifest and CI artifact kinds.
///
/// Declaration order doubles as the display order of a [`ScanResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ManifestKind {
    PackageJson,
    Dockerfile,
    DockerCompose,
    GithubActions,
    RequirementsTxt,
    PomXml,
    Gemfile,
    GoMod,
}

impl ManifestKind {
    pub const ALL: [ManifestKind; 8] = [
        Self::PackageJson,
        Self::Dockerfile,
        Self::DockerCompose,
        Self::GithubActions,
        Self::RequirementsTxt,
        Self::PomXml,
        Self::Gemfile,
        Self::GoMod,
    ];

    /// Path relative to the project root (a directory for `GithubActions`)
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::Dockerfile => "Dockerfile",
            Self::DockerCompose => "docker-compose.yml",
            Self::GithubActions => WORKFLOWS_DIR,
            Self::RequirementsTxt => "requirements.txt",
            Self::PomXml => "pom.xml",
            Self::Gemfile => "Gemfile",
            Self::GoMod => "go.mod",
        }
    }

    /// Language ecosystem implied by the presence of this manifest.
    /// Container and CI files say nothing about the language.
    pub fn ecosystem(&self) -> Option<Ecosystem> {
        match self {
            Self::PackageJson => Some(Ecosystem::Node),
            Self::RequirementsTxt => Some(Ecosystem::Python),
            Self::PomXml => Some(Ecosystem::Maven),
            Self::Gemfile => Some(Ecosystem::Ruby),
            Self::GoMod => Some(Ecosystem::Go),
            Self::Dockerfile | Self::DockerCompose | Self::GithubActions => None,
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

/// Ecosystem tags, declared in reporting priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ecosystem {
    Node,
    Python,
    Maven,
    Ruby,
    Go,
}

impl Ecosystem {
    pub const PRIORITY: [Ecosystem; 5] = [
        Self::Node,
        Self::Python,
        Self::Maven,
        Self::Ruby,
        Self::Go,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "JavaScript/TypeScript (Node.js)",
            Self::Python => "Python",
            Self::Maven => "Java (Maven)",
            Self::Ruby => "Ruby",
            Self::Go => "Go",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of parsing one manifest: a missing file is a value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Present(T),
    Absent,
}

impl<T> Parsed<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_ref(&self) -> Parsed<&T> {
        match self {
            Self::Present(v) => Parsed::Present(v),
            Self::Absent => Parsed::Absent,
        }
    }

    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Self::Present(v) => Parsed::Present(f(v)),
            Self::Absent => Parsed::Absent,
        }
    }
}

impl<T> From<Option<T>> for Parsed<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }
}

/// Manifest kinds physically present in a project directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    kinds: BTreeSet<ManifestKind>,
}

impl ScanResult {
    pub fn insert(&mut self, kind: ManifestKind) {
        self.kinds.insert(kind);
    }

    pub fn contains(&self, kind: ManifestKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ManifestKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<ManifestKind> for ScanResult {
    fn from_iter<I: IntoIterator<Item = ManifestKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}
