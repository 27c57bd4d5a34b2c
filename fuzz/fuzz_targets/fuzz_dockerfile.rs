// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use aegis::services::parsers::DockerfileParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let dockerfile = DockerfileParser::parse_str(data);
    let line_count = data.lines().count();

    let mut last = 0;
    for instruction in &dockerfile.instructions {
        assert!(!instruction.keyword.is_empty());
        assert!(instruction.line > last && instruction.line <= line_count);
        last = instruction.line;
    }

    let _ = dockerfile.base_images();
    let _ = dockerfile.to_string();
});
