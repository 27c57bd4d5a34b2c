// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{AnalysisPayload, Parsed, ParsedProjectRecord};
use crate::error::{Error, Result};
use crate::services::llm::{self, LlmProvider, NO_ANALYSIS};
use crate::services::manager::ParserManager;
use crate::services::redaction::{RedactionKeywords, Redactor};
use crate::services::safety;

/// Drives one project through parse → redact → prompt → provider.
///
/// The provider client is built on the first `analyze` call and reused for
/// the lifetime of the service.
pub struct AnalysisService {
    config: Config,
    parsers: ParserManager,
    provider: Option<Box<dyn LlmProvider>>,
}

impl AnalysisService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            parsers: ParserManager::new(),
            provider: None,
        }
    }

    /// Use a ready-made provider instead of building one from the config
    pub fn with_provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn provider(&mut self) -> Result<&dyn LlmProvider> {
        let provider = match self.provider.take() {
            Some(p) => p,
            None => llm::create_provider(&self.config)?,
        };
        Ok(&**self.provider.insert(provider))
    }

    /// Analyze the project at `root` and return the provider's report.
    pub async fn analyze(&mut self, root: &Path) -> Result<String> {
        // Fail on a missing credential before touching the project
        self.provider()?;

        let payload = self.prepare(root)?;
        self.analyze_prepared(&payload).await
    }

    /// Send a payload built by [`AnalysisService::prepare`] without parsing
    /// the project again.
    pub async fn analyze_prepared(&mut self, payload: &AnalysisPayload) -> Result<String> {
        self.provider()?;

        let secrets = safety::scan_for_secrets(payload);
        if !secrets.is_empty() {
            warn!(count = secrets.len(), "potential secrets detected in payload");
            if !self.config.allow_secrets {
                let mut patterns: Vec<String> = secrets
                    .iter()
                    .map(|s| format!("{} ({} line {})", s.pattern_name, s.section, s.line))
                    .collect();
                patterns.dedup();
                return Err(Error::SecretsDetected { patterns });
            }
        }

        let prompt = payload.to_prompt();
        let provider = self.provider()?;
        debug!(
            provider = provider.name(),
            prompt_chars = prompt.len(),
            "requesting analysis"
        );

        match provider.complete(&prompt).await? {
            Some(report) => Ok(report),
            None => {
                warn!(provider = provider.name(), "empty completion from provider");
                Ok(NO_ANALYSIS.to_string())
            }
        }
    }

    /// Build the outbound payload without contacting the provider.
    pub fn prepare(&self, root: &Path) -> Result<AnalysisPayload> {
        let record = self.parsers.parse_all(root)?;
        let keywords = self.keywords(&record);
        let detected_languages = record.detected_languages();
        debug!(
            languages = ?detected_languages,
            keywords = keywords.len(),
            "composing payload"
        );

        let all = self.config.redaction.all_manifests;
        let max = self.config.max_manifest_chars;

        // Dockerfile and workflows are always redacted; the rest only on request
        let always = |text: String| truncate(&Redactor::redact(&text, &keywords), max);
        let optional = |text: String| {
            if all {
                always(text)
            } else {
                truncate(&text, max)
            }
        };

        let package_json = match &record.package_json {
            Parsed::Present(pkg) => pkg.to_pretty_json(),
            Parsed::Absent => "{}".to_string(),
        };
        let workflows = record.workflows_json();

        Ok(AnalysisPayload {
            package_json: optional(package_json),
            dockerfile: record.dockerfile.present().map(|d| always(d.to_string())),
            workflows: always(workflows),
            requirements_txt: record.requirements_txt.present().map(optional),
            pom_xml: record.pom_xml.present().map(optional),
            gemfile: record.gemfile.present().map(optional),
            go_mod: record.go_mod.present().map(optional),
            docker_compose: record.docker_compose.present().map(optional),
            detected_languages,
        })
    }

    /// Package name first, then configured extras
    fn keywords(&self, record: &ParsedProjectRecord) -> RedactionKeywords {
        let mut keywords = RedactionKeywords::new();
        if let Parsed::Present(pkg) = &record.package_json {
            if let Some(name) = pkg.name() {
                keywords.push(name);
            }
        }
        for extra in &self.config.redaction.extra_keywords {
            keywords.push(extra.as_str());
        }
        keywords
    }
}

/// Cap `text` at `max` characters, marking how much was dropped
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => {
            let dropped = text[cut..].chars().count();
            format!("{}\n... [truncated {dropped} chars]", &text[..cut])
        }
    }
}
