// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod manifest;
mod payload;
mod record;

pub use manifest::*;
pub use payload::*;
pub use record::*;
