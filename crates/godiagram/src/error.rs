//! Error types for diagram generation.
//!
//! Loading and option handling are the only fallible stages. Once a
//! [`Relations`](crate::Relations) model exists, rendering cannot fail.

use godiagram_api::LoadError;
use thiserror::Error;

/// Result type alias for diagram operations.
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Invalid rendering configuration, reported before rendering starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The option key is not known
    #[error("Unknown rendering option: {key}")]
    UnknownOption {
        /// Key as given
        key: String,
    },

    /// The option exists but the value has the wrong kind
    #[error("Invalid value for rendering option '{key}': expected {expected}")]
    InvalidValue {
        /// Option key
        key: String,
        /// Expected value kind
        expected: &'static str,
    },
}

/// Top-level error for building and rendering diagrams.
#[derive(Error, Debug)]
pub enum DiagramError {
    /// Source packages could not be loaded
    #[error("Failed to load packages: {0}")]
    Load(#[from] LoadError),

    /// Rendering options were rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
