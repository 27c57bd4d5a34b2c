// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::config::Provider;
use crate::error::{Error, Result};

pub const ENV_FILE: &str = ".env";

/// Replace or append `KEY=value` in `.env`-style content, keeping other lines.
pub fn upsert_env_line(content: &str, key: &str, value: &str) -> String {
    let prefix = format!("{key}=");
    let mut replaced = false;
    let mut lines: Vec<String> = Vec::new();

    for line in content.lines() {
        let bare = line.trim_start().strip_prefix("export ").unwrap_or(line.trim_start());
        if bare.starts_with(&prefix) {
            if !replaced {
                lines.push(format!("{key}={value}"));
                replaced = true;
            }
            continue;
        }
        lines.push(line.to_string());
    }

    if !replaced {
        lines.push(format!("{key}={value}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Store the provider's API key in `<dir>/.env` with owner-only permissions.
pub fn store_api_key(dir: &Path, provider: Provider, api_key: &SecretString) -> Result<PathBuf> {
    let key = api_key.expose_secret().trim();
    if key.is_empty() {
        return Err(Error::Config("API key cannot be empty".into()));
    }
    if key.contains(['\n', '\r']) {
        return Err(Error::Config("API key cannot contain line breaks".into()));
    }

    let path = dir.join(ENV_FILE);
    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(source) => return Err(Error::FileRead { path, source }),
    };

    fs::write(&path, upsert_env_line(&existing, provider.api_key_env(), key))?;

    // Set secure permissions (0600)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    debug!(path = %path.display(), env_var = provider.api_key_env(), "api key stored");
    Ok(path)
}
