// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::Path;

use super::ManifestParser;
use crate::domain::{Dockerfile, Instruction, ManifestKind, Parsed};
use crate::error::Result;
use crate::services::fs::read_manifest;

pub struct DockerfileParser;

impl DockerfileParser {
    /// Split Dockerfile text into instructions.
    ///
    /// Tolerant by construction: unknown keywords are kept as-is and nothing
    /// here can fail. Comments and parser directives are dropped, `\`
    /// continuations are joined with single spaces.
    pub fn parse_str(content: &str) -> Dockerfile {
        let mut instructions = Vec::new();
        let mut pending: Option<(usize, Vec<String>)> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (segment, continues) = match line.strip_suffix('\\') {
                Some(rest) => (rest.trim_end(), true),
                None => (line, false),
            };

            let (_, parts) = pending.get_or_insert_with(|| (idx + 1, Vec::new()));
            if !segment.is_empty() {
                parts.push(segment.to_string());
            }

            if !continues {
                if let Some((start, parts)) = pending.take() {
                    instructions.extend(Self::instruction(start, &parts));
                }
            }
        }

        // Dangling continuation at end of file
        if let Some((start, parts)) = pending.take() {
            instructions.extend(Self::instruction(start, &parts));
        }

        Dockerfile { instructions }
    }

    fn instruction(line: usize, parts: &[String]) -> Option<Instruction> {
        let joined = parts.join(" ");
        let mut split = joined.splitn(2, char::is_whitespace);
        let keyword = split.next().filter(|k| !k.is_empty())?.to_uppercase();
        let arguments = split.next().unwrap_or("").trim().to_string();
        Some(Instruction {
            keyword,
            arguments,
            line,
        })
    }
}

impl ManifestParser for DockerfileParser {
    type Output = Parsed<Dockerfile>;

    fn kind(&self) -> ManifestKind {
        ManifestKind::Dockerfile
    }

    fn parse(&self, root: &Path) -> Result<Self::Output> {
        let path = root.join(self.kind().relative_path());
        Ok(read_manifest(&path)?
            .map(|content| Self::parse_str(&content))
            .into())
    }
}
