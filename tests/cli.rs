// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod helpers;

use assert_cmd::Command;
use helpers::Project;
use predicates::prelude::*;

/// The binary with a clean environment rooted in `project`: no credentials,
/// no user config, no colors.
fn aegis(project: &Project) -> Command {
    let mut cmd = Command::cargo_bin("aegis").unwrap();
    cmd.current_dir(project.path())
        .env("HOME", project.path())
        .env("XDG_CONFIG_HOME", project.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("OPENAI_API_KEY")
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("AEGIS_API_KEY")
        .env_remove("AEGIS_PROVIDER")
        .env_remove("AEGIS_MODEL");
    cmd
}

fn sample_project() -> Project {
    Project::new()
        .file("package.json", r#"{"name": "acme-web", "dependencies": {"express": "^4.19.0"}}"#)
        .file("Dockerfile", "FROM acme-web-base:1.0\nCOPY . /srv/acme-web\n")
        .file(".github/workflows/ci.yml", "name: acme-web ci\non: push\n")
}

#[test]
fn scan_lists_manifests_with_ecosystems() {
    let project = sample_project();
    aegis(&project)
        .args(["scan", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "package.json (JavaScript/TypeScript (Node.js))",
        ))
        .stdout(predicate::str::contains("Dockerfile"))
        .stdout(predicate::str::contains(".github/workflows"));
}

#[test]
fn scan_of_empty_project_succeeds() {
    let project = Project::new();
    aegis(&project)
        .arg("scan")
        .assert()
        .success()
        .stderr(predicate::str::contains("No known manifests found"));
}

#[test]
fn dry_run_prints_redacted_prompt_without_credentials() {
    let project = sample_project();
    aegis(&project)
        .args(["--dry-run", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("--- PROMPT ---"))
        .stderr(predicate::str::contains("FROM [REDACTED_PROJECT_NAME]-base:1.0"))
        .stderr(predicate::str::contains("acme-web ci").not());
}

#[test]
fn analysis_without_api_key_fails_with_hint() {
    let project = sample_project();
    aegis(&project)
        .arg(".")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn missing_project_directory_fails() {
    let project = Project::new();
    aegis(&project)
        .args(["scan", "does-not-exist"])
        .assert()
        .failure();
}

#[test]
fn project_config_file_is_honored() {
    let project = Project::new().file(
        ".aegis.toml",
        "provider = \"anthropic\"\nmodel = \"claude-sonnet-4-20250514\"\n",
    );
    aegis(&project)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider: anthropic"))
        .stdout(predicate::str::contains("Model: claude-sonnet-4-20250514"))
        .stdout(predicate::str::contains("API key: missing"));
}

#[test]
fn environment_overrides_config_file() {
    let project = Project::new().file(".aegis.toml", "model = \"from-file\"\n");
    aegis(&project)
        .env("AEGIS_MODEL", "from-env")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Model: from-env"));
}

#[test]
fn provider_switch_picks_its_default_model() {
    let project = Project::new();
    aegis(&project)
        .env("AEGIS_PROVIDER", "anthropic")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider: anthropic"))
        .stdout(predicate::str::contains("Model: claude-sonnet-4-20250514"));
}

#[test]
fn show_prompt_prints_payload_before_failing_on_missing_key() {
    let project = sample_project();
    aegis(&project)
        .args(["--show-prompt", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--- PROMPT ---"))
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn dotenv_file_supplies_api_key() {
    let project = Project::new().file(".env", "OPENAI_API_KEY=sk-from-dotenv\n");
    aegis(&project)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("API key: configured"));
}

#[test]
fn completions_are_generated() {
    let project = Project::new();
    aegis(&project)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aegis"));
}
