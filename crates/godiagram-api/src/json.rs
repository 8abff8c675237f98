//! JSON form of the semantic model.
//!
//! A document is an array of [`SemanticPackage`]s. This lets an external
//! semantic-analysis toolchain feed the relation model builder directly.

use crate::{
    errors::{LoadError, LoadResult},
    semantic::SemanticPackage,
};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Parse packages from a JSON string
pub fn from_str(source: &str) -> LoadResult<Vec<SemanticPackage>> {
    serde_json::from_str(source).map_err(|e| LoadError::Json(PathBuf::from("<memory>"), e.to_string()))
}

/// Parse packages from any reader
pub fn from_reader<R: Read>(reader: R) -> LoadResult<Vec<SemanticPackage>> {
    serde_json::from_reader(reader).map_err(|e| LoadError::Json(PathBuf::from("<reader>"), e.to_string()))
}

/// Read and parse a JSON file
pub fn from_path(path: &Path) -> LoadResult<Vec<SemanticPackage>> {
    let source = fs::read_to_string(path).map_err(|e| LoadError::IoError(path.to_path_buf(), e))?;
    serde_json::from_str(&source).map_err(|e| LoadError::Json(path.to_path_buf(), e.to_string()))
}

/// Serialize packages as pretty-printed JSON
pub fn to_string_pretty(packages: &[SemanticPackage]) -> LoadResult<String> {
    serde_json::to_string_pretty(packages)
        .map_err(|e| LoadError::Json(PathBuf::from("<memory>"), e.to_string()))
}
