// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Failed to read {}", path.display())]
    #[diagnostic(
        code(aegis::fs::read),
        help("Check the file permissions and that it is valid UTF-8 text")
    )]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest {}: {message}", path.display())]
    #[diagnostic(code(aegis::parser::malformed))]
    MalformedManifest { path: PathBuf, message: String },

    #[error("Cannot scan directory {}", path.display())]
    #[diagnostic(
        code(aegis::scan::failed),
        help("Pass the path of an existing, readable project directory")
    )]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{env_var} is not set; the {provider} provider requires an API key")]
    #[diagnostic(
        code(aegis::config::missing_key),
        help("Export {env_var}, add it to a .env file, or run: aegis set-key")
    )]
    MissingApiKey { provider: String, env_var: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(aegis::config::error))]
    Config(String),

    #[error("Potential secrets detected in outbound payload: {patterns:?}")]
    #[diagnostic(
        code(aegis::safety::secrets),
        help("Remove the secrets from the manifests, or rerun with --allow-secrets")
    )]
    SecretsDetected { patterns: Vec<String> },

    #[error("Provider '{provider}' error: {message}")]
    #[diagnostic(code(aegis::provider::error))]
    Provider { provider: String, message: String },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
