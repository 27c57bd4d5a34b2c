// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::AnalysisPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretMatch {
    pub pattern_name: String,
    pub section: String,
    pub line: usize,
}

static SECRET_PATTERNS: LazyLock<Vec<(&str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "API Key",
            Regex::new(r#"(?i)(api[_-]?key|apikey)\s*[:=]\s*["']?[a-zA-Z0-9_-]{20,}"#).unwrap(),
        ),
        ("AWS Key", Regex::new(r"AKIA[0-9A-Z]{16}").unwrap()),
        (
            "Private Key",
            Regex::new(r"-----BEGIN .* PRIVATE KEY-----").unwrap(),
        ),
        (
            "Anthropic Key",
            Regex::new(r"sk-ant-[a-zA-Z0-9-]{80,}").unwrap(),
        ),
        ("OpenAI Key", Regex::new(r"sk-[a-zA-Z0-9]{48}").unwrap()),
        (
            "Generic Secret",
            Regex::new(r#"(?i)(password|secret|token)\s*[:=]\s*["'][^"']{8,}["']"#).unwrap(),
        ),
        (
            "Connection String",
            Regex::new(r"(?i)(mongodb|postgres|mysql|redis)://[^\s]+:[^\s]+@[^\s]+").unwrap(),
        ),
    ]
});

/// Scan every payload section for credentials before it leaves the machine.
pub fn scan_for_secrets(payload: &AnalysisPayload) -> Vec<SecretMatch> {
    let mut found = Vec::new();

    for (section, body) in payload.sections() {
        let Some(body) = body else { continue };

        for (idx, line) in body.lines().enumerate() {
            for (name, pattern) in SECRET_PATTERNS.iter() {
                if pattern.is_match(line) {
                    found.push(SecretMatch {
                        pattern_name: name.to_string(),
                        section: section.to_string(),
                        line: idx + 1,
                    });
                    break; // One match per line is enough
                }
            }
        }
    }

    found
}
