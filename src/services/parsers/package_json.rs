// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::Path;

use serde_json::Value;

use super::ManifestParser;
use crate::domain::{ManifestKind, PackageManifest, Parsed};
use crate::error::{Error, Result};
use crate::services::fs::read_manifest;

pub struct PackageJsonParser;

impl ManifestParser for PackageJsonParser {
    type Output = Parsed<PackageManifest>;

    fn kind(&self) -> ManifestKind {
        ManifestKind::PackageJson
    }

    fn parse(&self, root: &Path) -> Result<Self::Output> {
        let path = root.join(self.kind().relative_path());
        let Some(content) = read_manifest(&path)? else {
            return Ok(Parsed::Absent);
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(Parsed::Present(PackageManifest(map))),
            Ok(other) => Err(Error::MalformedManifest {
                path,
                message: format!("expected a JSON object, found {}", json_type(&other)),
            }),
            Err(e) => Err(Error::MalformedManifest {
                path,
                message: e.to_string(),
            }),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
