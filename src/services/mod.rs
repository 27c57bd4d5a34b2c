// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod analysis;
pub mod credentials;
pub mod fs;
pub mod llm;
pub mod manager;
pub mod parsers;
pub mod redaction;
pub mod safety;
pub mod scanner;
