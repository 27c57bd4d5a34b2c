// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use async_trait::async_trait;
use secrecy::SecretString;

pub mod anthropic;
pub mod openai;

use crate::config::{Config, Provider};
use crate::error::{Error, Result};

/// Returned when the provider answers with an empty completion
pub const NO_ANALYSIS: &str = "No analysis available.";

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send `prompt` as a single user message and return the completion text.
    ///
    /// `Ok(None)` means the response was well-formed but carried no text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>>;

    fn name(&self) -> &str;
}

/// Build the configured provider. Fails before any network traffic when the
/// provider's API key is missing.
pub fn create_provider(config: &Config) -> Result<Box<dyn LlmProvider>> {
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| SecretString::from(k.to_string()))
        .ok_or_else(|| Error::MissingApiKey {
            provider: config.provider.to_string(),
            env_var: config.provider.api_key_env().to_string(),
        })?;

    match config.provider {
        Provider::OpenAI => Ok(Box::new(openai::OpenAiProvider::new(config, api_key))),
        Provider::Anthropic => Ok(Box::new(anthropic::AnthropicProvider::new(config, api_key))),
    }
}

pub(crate) fn transport_error(provider: &str, e: reqwest::Error) -> Error {
    let message = if e.is_timeout() {
        "request timed out".to_string()
    } else {
        e.to_string()
    };
    Error::Provider {
        provider: provider.into(),
        message,
    }
}
