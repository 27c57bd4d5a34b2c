// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use super::Ecosystem;

pub const NOT_FOUND: &str = "Not found";

/// Outbound analysis request, already redacted and truncated.
#[derive(Debug)]
pub struct AnalysisPayload {
    pub detected_languages: Vec<Ecosystem>,
    pub package_json: String,
    pub dockerfile: Option<String>,
    pub workflows: String,
    pub requirements_txt: Option<String>,
    pub pom_xml: Option<String>,
    pub gemfile: Option<String>,
    pub go_mod: Option<String>,
    pub docker_compose: Option<String>,
}

impl AnalysisPayload {
    /// Named sections in prompt order, `None` for absent manifests
    pub fn sections(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("package.json", Some(self.package_json.as_str())),
            ("Dockerfile", self.dockerfile.as_deref()),
            ("GitHub Actions Workflows", Some(self.workflows.as_str())),
            ("requirements.txt", self.requirements_txt.as_deref()),
            ("pom.xml", self.pom_xml.as_deref()),
            ("Gemfile", self.gemfile.as_deref()),
            ("go.mod", self.go_mod.as_deref()),
            ("docker-compose.yml", self.docker_compose.as_deref()),
        ]
    }

    pub fn to_prompt(&self) -> String {
        let languages = if self.detected_languages.is_empty() {
            "none detected".to_string()
        } else {
            self.detected_languages
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let fences = ["json", "dockerfile", "json", "text", "xml", "ruby", "text", "yaml"];
        let mut context = String::new();
        for ((name, body), fence) in self.sections().into_iter().zip(fences) {
            context.push_str(&format!(
                "- **{name}:**\n```{fence}\n{}\n```\n\n",
                body.unwrap_or(NOT_FOUND)
            ));
        }

        format!(
            r#"Act as a senior security engineer. Analyze the following project information and provide a step-by-step plan to improve its security.
Format your response in Markdown. For each step, provide a clear title, a description of the recommendation, and, if applicable, a code snippet for implementation.

When providing recommendations, please be as specific as possible:
- For CI/CD pipeline changes, specify where to add the new job or step. Should it run before or after the build and test steps? Can it run in parallel?
- Consider the project's performance and execution time. Recommend solutions that provide the best security benefit with the minimum performance impact.
- For Dockerfile changes, indicate exactly where the new lines should be added.

Detected languages: {languages}

Project Context:
{context}Please provide your step-by-step security improvement plan below."#
        )
    }
}
