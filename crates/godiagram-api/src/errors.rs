use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading packages
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read a file or directory
    #[error("IO error reading {0}: {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// Syntax error in source code
    #[error("Syntax error in {0}:{1}:{2}: {3}")]
    SyntaxError(PathBuf, usize, usize, String),

    /// Generic parsing error
    #[error("Parse error in {0}: {1}")]
    ParseError(PathBuf, String),

    /// Files of one directory declare different packages
    #[error("Found packages {1} and {2} in {0}")]
    MixedPackages(PathBuf, String, String),

    /// Requested directory does not exist
    #[error("Could not find directory {0}")]
    DirectoryNotFound(PathBuf),

    /// Malformed serialized semantic model
    #[error("Invalid semantic model in {0}: {1}")]
    Json(PathBuf, String),
}

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
