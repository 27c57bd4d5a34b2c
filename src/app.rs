// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::Path;
use std::time::Duration;

use console::style;
use dialoguer::Password;
use indicatif::{ProgressBar, ProgressStyle};
use secrecy::SecretString;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::{analysis::AnalysisService, credentials, scanner::ProjectScanner};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            provider = %config.provider,
            model = %config.model(),
            api_key = config.api_key.is_some(),
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub async fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        let root = self.cli.path.clone();
        self.analyze(&root).await
    }

    async fn analyze(&self, root: &Path) -> Result<()> {
        self.print_status(&format!("Scanning project at: {}", root.display()));

        let found = ProjectScanner::scan(root)?;
        if found.is_empty() {
            self.print_warning("No known manifests found; the report will be generic");
        } else {
            let names: Vec<String> = found.iter().map(|k| k.to_string()).collect();
            self.print_info(&format!("Found: {}", names.join(", ")));
        }

        let mut service = AnalysisService::new(self.config.clone());

        let prepared = if self.cli.dry_run || self.cli.show_prompt {
            let payload = service.prepare(root)?;
            eprintln!("{}", style("--- PROMPT ---").dim());
            eprintln!("{}", payload.to_prompt());
            eprintln!("{}", style("--- END PROMPT ---").dim());
            if self.cli.dry_run {
                return Ok(());
            }
            Some(payload)
        } else {
            None
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!(
            "Contacting {} ({})...",
            self.config.provider,
            self.config.model()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = match prepared {
            Some(payload) => service.analyze_prepared(&payload).await,
            None => service.analyze(root).await,
        };
        spinner.finish_and_clear();
        let report = result?;

        eprintln!("\n{}", style("--- AI Security Analysis ---").bold().blue());
        println!("{report}");
        eprintln!("\n{} Scan complete.", style("✓").green().bold());
        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Scan { path } => {
                let found = ProjectScanner::scan(path)?;
                if found.is_empty() {
                    self.print_info("No known manifests found");
                }
                for kind in found.iter() {
                    match kind.ecosystem() {
                        Some(eco) => println!("{kind} ({eco})"),
                        None => println!("{kind}"),
                    }
                }
                Ok(())
            }
            Commands::SetKey => self.set_api_key(),
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Provider: {}", self.config.provider);
                println!("Model: {}", self.config.model());
                println!(
                    "API key: {}",
                    if self.config.api_key.is_some() {
                        "configured"
                    } else {
                        "missing"
                    }
                );
                println!("Timeout: {}s", self.config.timeout_secs);
                println!("Temperature: {}", self.config.temperature);
                println!("Max tokens: {}", self.config.max_tokens);
                println!("Max manifest chars: {}", self.config.max_manifest_chars);
                println!();
                println!("[redaction]");
                println!(
                    "  extra_keywords: {:?}",
                    self.config.redaction.extra_keywords
                );
                println!("  all_manifests: {}", self.config.redaction.all_manifests);
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "aegis", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn set_api_key(&self) -> Result<()> {
        let provider = self.config.provider;
        let key = Password::new()
            .with_prompt(format!("Enter your {provider} API key"))
            .interact()?;

        if key.trim().is_empty() {
            return Err(Error::Cancelled);
        }

        let dir = std::env::current_dir()?;
        let path = credentials::store_api_key(&dir, provider, &SecretString::from(key))?;
        eprintln!(
            "{} {} saved to {}",
            style("✓").green().bold(),
            provider.api_key_env(),
            path.display()
        );
        Ok(())
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}
