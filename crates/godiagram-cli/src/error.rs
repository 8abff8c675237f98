//! Errors surfaced by the godiagram CLI

use thiserror::Error;

use crate::config::ConfigFileError;
use godiagram::{ConfigError, DiagramError};

/// Any fatal condition of a CLI run
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line input
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),

    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the user should be pointed at `--help`
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }
}

impl From<godiagram_api::LoadError> for CliError {
    fn from(err: godiagram_api::LoadError) -> Self {
        CliError::Diagram(DiagramError::Load(err))
    }
}
