// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{LlmProvider, transport_error};
use crate::config::Config;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: SecretString,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl AnthropicProvider {
    pub fn new(config: &Config, api_key: SecretString) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config
                .anthropic_base_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            model: config.model().to_string(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    async fn complete(&self, prompt: &str) -> Result<Option<String>> {
        let url = format!("{}/messages", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", API_VERSION)
            .json(&MessagesRequest {
                model: &self.model,
                messages: vec![Message {
                    role: "user",
                    content: prompt,
                }],
                temperature: self.temperature,
                max_tokens: self.max_tokens,
            })
            .send()
            .await
            .map_err(|e| transport_error("anthropic", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Provider {
                provider: "anthropic".into(),
                message: format!("HTTP {status}: {body}"),
            });
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| transport_error("anthropic", e))?;

        // Concatenate text blocks; tool or thinking blocks carry no report text
        let text: String = body
            .content
            .into_iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text)
            .collect();

        Ok(Some(text).filter(|t| !t.is_empty()))
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}
