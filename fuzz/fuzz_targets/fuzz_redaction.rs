// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use aegis::services::redaction::{PLACEHOLDER, RedactionKeywords, Redactor};
use libfuzzer_sys::fuzz_target;

// First line is the keyword, the rest is the text
fuzz_target!(|data: &str| {
    let (keyword, text) = data.split_once('\n').unwrap_or((data, ""));
    let keywords: RedactionKeywords = [keyword].into_iter().collect();

    let (out, count) = Redactor::redact_count(text, &keywords);
    if keywords.is_empty() {
        assert_eq!(out, text);
        assert_eq!(count, 0);
    } else {
        assert!(out.matches(PLACEHOLDER).count() >= count);
    }
});
