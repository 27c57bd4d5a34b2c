// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "aegis")]
#[command(version)]
#[command(about = "AI-powered pipeline security scanner", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Project directory to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// LLM provider (openai, anthropic)
    #[arg(short, long, env = "AEGIS_PROVIDER")]
    pub provider: Option<String>,

    /// Model name
    #[arg(short, long, env = "AEGIS_MODEL")]
    pub model: Option<String>,

    /// Print the redacted payload and exit without contacting the provider
    #[arg(long)]
    pub dry_run: bool,

    /// Show the prompt sent to the LLM
    #[arg(long)]
    pub show_prompt: bool,

    /// Send the payload even if it appears to contain secrets
    #[arg(long)]
    pub allow_secrets: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the manifests present in a project without parsing them
    Scan {
        /// Project directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Prompt for an API key and save it to .env in the current directory
    SetKey,
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
