// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use regex::{Captures, Regex, RegexBuilder};
use tracing::debug;

pub const PLACEHOLDER: &str = "[REDACTED_PROJECT_NAME]";

/// Compiled program budget for one keyword alternation
const PATTERN_SIZE_LIMIT: usize = 64 << 20;

/// Ordered literal keywords identifying the project.
///
/// Keywords are stored verbatim. Blank and duplicate entries are dropped on
/// insert; a blank keyword would otherwise match between every character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionKeywords {
    keywords: Vec<String>,
}

impl RedactionKeywords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if keyword.trim().is_empty() || self.keywords.contains(&keyword) {
            return;
        }
        self.keywords.push(keyword);
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

impl<S: Into<String>> FromIterator<S> for RedactionKeywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.push(keyword);
        }
        set
    }
}

pub struct Redactor;

impl Redactor {
    /// Replace every case-insensitive occurrence of any keyword with [`PLACEHOLDER`].
    pub fn redact(text: &str, keywords: &RedactionKeywords) -> String {
        Self::redact_count(text, keywords).0
    }

    /// Like [`Redactor::redact`], also returning the number of replacements.
    ///
    /// Keywords go into one alternation applied in a single pass, so an
    /// earlier keyword wins an overlap at the same position. Sets too large
    /// for one regex are split into ordered alternations applied in turn;
    /// every alternation leaves existing placeholders alone.
    pub fn redact_count(text: &str, keywords: &RedactionKeywords) -> (String, usize) {
        if keywords.is_empty() {
            return (text.to_string(), 0);
        }

        let patterns = Self::patterns(keywords.as_slice());
        let mut redacted = text.to_string();
        let mut count = 0;
        for pattern in &patterns {
            let (next, replaced) = Self::replace(pattern, &redacted);
            redacted = next;
            count += replaced;
        }

        if count > 0 {
            debug!(count, patterns = patterns.len(), "redacted project keywords");
        }
        (redacted, count)
    }

    fn replace(pattern: &Regex, text: &str) -> (String, usize) {
        let mut count = 0;
        let redacted = pattern.replace_all(text, |caps: &Captures<'_>| {
            if &caps[0] != PLACEHOLDER {
                count += 1;
            }
            PLACEHOLDER
        });
        (redacted.into_owned(), count)
    }

    /// One alternation when it fits, otherwise halves until each part compiles
    fn patterns(keywords: &[String]) -> Vec<Regex> {
        if let Some(pattern) = Self::build(keywords, PATTERN_SIZE_LIMIT) {
            return vec![pattern];
        }

        match keywords {
            [] => Vec::new(),
            // An escaped literal only fails on size
            [_] => Self::build(keywords, usize::MAX).into_iter().collect(),
            _ => {
                debug!(keywords = keywords.len(), "keyword pattern too large, splitting");
                let (head, tail) = keywords.split_at(keywords.len() / 2);
                let mut patterns = Self::patterns(head);
                patterns.extend(Self::patterns(tail));
                patterns
            }
        }
    }

    fn build(keywords: &[String], size_limit: usize) -> Option<Regex> {
        // Placeholder first, matched exactly, so it is never rewritten
        let alternation = std::iter::once(format!("(?-i:{})", regex::escape(PLACEHOLDER)))
            .chain(keywords.iter().map(|k| regex::escape(k)))
            .collect::<Vec<_>>()
            .join("|");

        RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .size_limit(size_limit)
            .dfa_size_limit(size_limit)
            .build()
            .ok()
    }
}
