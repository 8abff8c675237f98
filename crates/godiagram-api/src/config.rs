use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which directories a [`PackageLoader`](crate::PackageLoader) reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Directories to load packages from
    pub directories: Vec<PathBuf>,

    /// Directories skipped during recursive discovery
    pub ignored_directories: Vec<PathBuf>,

    /// Walk subdirectories of every entry in `directories`
    pub recursive: bool,
}

impl LoadOptions {
    pub fn new<I, P>(directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Enable recursive discovery
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Add directories to skip
    pub fn with_ignored<I, P>(mut self, ignored: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.ignored_directories
            .extend(ignored.into_iter().map(Into::into));
        self
    }

    /// Whether `dir` is one of the ignored directories
    pub fn is_ignored(&self, dir: &Path) -> bool {
        self.ignored_directories.iter().any(|ignored| ignored == dir)
    }
}
