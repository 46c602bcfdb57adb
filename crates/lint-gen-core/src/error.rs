//! Error types for lint-gen operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating configuration or saving templates
///
/// Most of these never escape a command: generation reports them to the operator and keeps
/// going. Only [`LintGenError::Cancelled`], [`LintGenError::NoHomeDirectory`] and
/// [`LintGenError::StoreWrite`] end a command early.
#[derive(Debug, Error)]
pub enum LintGenError {
    #[error("Unsupported config type: {tool}")]
    UnsupportedTool { tool: String },

    #[error("Invalid config type for {tool}: {variant}")]
    InvalidVariant { tool: String, variant: String },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run `{command}`: {source}")]
    InstallSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    InstallStatus { command: String, code: i32 },

    #[error("Could not determine the home directory; set LINT_GEN_TEMPLATES_PATH instead")]
    NoHomeDirectory,

    #[error("Failed to write template store {}: {source}", path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}

impl LintGenError {
    /// Map a prompt IO error, treating an operator interrupt as cancellation
    pub fn from_prompt(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::Prompt(err),
        }
    }
}

pub type Result<T, E = LintGenError> = std::result::Result<T, E>;
