// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Which manifests pass through the redactor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Extra literal keywords redacted alongside the package name
    #[serde(default)]
    pub extra_keywords: Vec<String>,

    /// Redact every text section instead of only the Dockerfile and workflows
    /// (default: false)
    #[serde(default)]
    pub all_manifests: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAI,
    Anthropic,
}

impl Provider {
    /// Model used when none is configured
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAI => "gpt-4",
            Self::Anthropic => "claude-sonnet-4-20250514",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAI => write!(f, "openai"),
            Self::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(Error::Config(format!(
                "unknown provider '{other}', expected openai or anthropic"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: Provider,

    /// Model name; unset means the provider's default
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for OpenAI-compatible APIs (default: https://api.openai.com/v1)
    #[serde(default)]
    pub openai_base_url: Option<String>,

    /// Base URL for the Anthropic API (default: https://api.anthropic.com/v1)
    #[serde(default)]
    pub anthropic_base_url: Option<String>,

    /// Request timeout in seconds (default 120)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// LLM temperature (0.0-2.0, default 0.2)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate (default 2048)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-manifest character cap in the outbound payload (default 20000)
    #[serde(default = "default_max_manifest_chars")]
    pub max_manifest_chars: usize,

    /// Send the payload even when it looks like it contains credentials
    #[serde(default)]
    pub allow_secrets: bool,

    #[serde(default)]
    pub redaction: RedactionConfig,
}

fn default_timeout_secs() -> u64 {
    120
}
fn default_temperature() -> f32 {
    0.2
}
fn default_max_tokens() -> u32 {
    2048
}
fn default_max_manifest_chars() -> usize {
    20_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: None,
            api_key: None,
            openai_base_url: None,
            anthropic_base_url: None,
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            max_manifest_chars: default_max_manifest_chars(),
            allow_secrets: false,
            redaction: RedactionConfig::default(),
        }
    }
}

impl Config {
    /// Configured model, or the provider's default
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.aegis.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".aegis.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (AEGIS_MODEL, AEGIS_PROVIDER, etc.)
        // Use __ separator for nested keys (e.g., AEGIS_REDACTION__ALL_MANIFESTS)
        figment = figment.merge(Env::prefixed("AEGIS_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority)
        config.apply_cli(cli)?;

        // Provider-specific API key fallback, .env already loaded by main
        if config.api_key.is_none() {
            config.api_key = std::env::var(config.provider.api_key_env()).ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "aegis").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(ref p) = cli.provider {
            self.provider = p.parse()?;
        }
        if let Some(ref m) = cli.model {
            self.model = Some(m.clone());
        }
        if cli.allow_secrets {
            self.allow_secrets = true;
        }
        Ok(())
    }

    /// Range and URL checks. A missing API key is not an error here: only
    /// the provider call needs one.
    pub fn validate(&self) -> Result<()> {
        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err(Error::Config("model cannot be empty".into()));
        }

        if !(1..=3600).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–3600, got {}",
                self.timeout_secs
            )));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Config(format!(
                "temperature must be 0.0–2.0, got {}",
                self.temperature
            )));
        }

        if !(1_000..=200_000).contains(&self.max_manifest_chars) {
            return Err(Error::Config(format!(
                "max_manifest_chars must be 1000–200000, got {}",
                self.max_manifest_chars
            )));
        }

        for (name, value) in [
            ("openai_base_url", &self.openai_base_url),
            ("anthropic_base_url", &self.anthropic_base_url),
        ] {
            let Some(raw) = value else { continue };
            let parsed = url::Url::parse(raw)
                .map_err(|e| Error::Config(format!("{name} is not a valid URL: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "{name} must start with http:// or https://, got '{raw}'"
                )));
            }
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# Aegis Configuration

# LLM provider: openai, anthropic
provider = "openai"

# Model name (default: gpt-4 for openai, claude-sonnet-4-20250514 for anthropic)
# model = "gpt-4"

# API key (prefer OPENAI_API_KEY / ANTHROPIC_API_KEY or `aegis set-key`)
# api_key = ""

# Request timeout in seconds
timeout_secs = 120

# Per-manifest character cap in the prompt; longer files are truncated
max_manifest_chars = 20000

[redaction]
# Extra literal keywords to redact besides the package.json name
extra_keywords = []

# Redact every manifest, not just the Dockerfile and CI workflows
all_manifests = false
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
