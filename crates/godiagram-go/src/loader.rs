//! Implementation of the PackageLoader trait for Go

use godiagram_api::{LoadError, LoadMetrics, LoadOptions, LoadResult, PackageLoader, SemanticPackage};
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::extractor;
use crate::module;
use crate::resolver;
use crate::syntax::{ParsedFile, ParsedPackage};

/// Settings of the Go loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoLoaderConfig {
    /// Files larger than this many bytes fail the load
    pub max_file_size: usize,
    /// Parse the files of a directory on the rayon pool
    pub parallel: bool,
}

impl Default for GoLoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            parallel: true,
        }
    }
}

/// Go package loader implementing the PackageLoader trait
pub struct GoLoader {
    config: GoLoaderConfig,
    metrics: Mutex<LoadMetrics>,
}

impl GoLoader {
    pub fn new() -> Self {
        Self::with_config(GoLoaderConfig::default())
    }

    pub fn with_config(config: GoLoaderConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(LoadMetrics::default()),
        }
    }

    pub fn config(&self) -> &GoLoaderConfig {
        &self.config
    }

    fn update_metrics(&self, success: bool, duration: Duration) {
        let mut metrics = self.metrics.lock().unwrap();
        metrics.files_attempted += 1;
        if success {
            metrics.files_succeeded += 1;
        } else {
            metrics.files_failed += 1;
        }
        metrics.total_parse_time += duration;
    }

    fn record_packages(&self, packages: &[SemanticPackage]) {
        let mut metrics = self.metrics.lock().unwrap();
        metrics.packages_loaded += packages.len();
        metrics.types_extracted += packages.iter().map(|p| p.objects.len()).sum::<usize>();
    }

    fn parse_file(&self, path: &Path) -> LoadResult<ParsedFile> {
        let start = Instant::now();
        let result = self.read_and_extract(path);
        self.update_metrics(result.is_ok(), start.elapsed());
        result
    }

    fn read_and_extract(&self, path: &Path) -> LoadResult<ParsedFile> {
        let metadata = fs::metadata(path).map_err(|e| LoadError::IoError(path.to_path_buf(), e))?;
        if metadata.len() as usize > self.config.max_file_size {
            return Err(LoadError::ParseError(
                path.to_path_buf(),
                format!(
                    "file is {} bytes, larger than the {} byte limit",
                    metadata.len(),
                    self.config.max_file_size
                ),
            ));
        }

        let source =
            fs::read_to_string(path).map_err(|e| LoadError::IoError(path.to_path_buf(), e))?;
        extractor::extract(&source, path)
    }

    /// Source files of `dir`, sorted by name
    fn source_files(&self, dir: &Path) -> LoadResult<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| LoadError::IoError(dir.to_path_buf(), e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| LoadError::IoError(dir.to_path_buf(), e))?
                .path();
            if path.is_file() && self.can_load(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Parse the package in `dir`, `None` when it holds no Go sources
    fn parse_directory(&self, dir: &Path) -> LoadResult<Option<ParsedPackage>> {
        if !dir.is_dir() {
            return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
        }
        self.metrics.lock().unwrap().directories_scanned += 1;

        let files = self.source_files(dir)?;
        if files.is_empty() {
            debug!("No Go sources in {}", dir.display());
            return Ok(None);
        }

        let parsed: Vec<LoadResult<ParsedFile>> = if self.config.parallel {
            files.par_iter().map(|path| self.parse_file(path)).collect()
        } else {
            files.iter().map(|path| self.parse_file(path)).collect()
        };
        let files = parsed.into_iter().collect::<LoadResult<Vec<_>>>()?;

        let name = files[0].package.clone();
        if let Some(other) = files.iter().find(|f| f.package != name) {
            return Err(LoadError::MixedPackages(
                dir.to_path_buf(),
                name,
                other.package.clone(),
            ));
        }

        let path = module::import_path(dir)?;
        debug!(
            "Parsed package {} ({}) from {} files in {}",
            name,
            path,
            files.len(),
            dir.display()
        );
        Ok(Some(ParsedPackage {
            dir: dir.to_path_buf(),
            name,
            path,
            files,
        }))
    }
}

impl Default for GoLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageLoader for GoLoader {
    fn name(&self) -> &str {
        "go"
    }

    fn load_directory(&self, dir: &Path) -> LoadResult<Vec<SemanticPackage>> {
        let parsed: Vec<ParsedPackage> = self.parse_directory(dir)?.into_iter().collect();
        let packages = resolver::resolve_all(&parsed);
        self.record_packages(&packages);
        Ok(packages)
    }

    /// Parse every discovered directory, then resolve the whole set together
    fn load(&self, options: &LoadOptions) -> LoadResult<Vec<SemanticPackage>> {
        let directories = self.discover_directories(options)?;
        info!(
            "Loading {} directories with the {} loader",
            directories.len(),
            self.name()
        );

        let mut parsed = Vec::new();
        for dir in &directories {
            if let Some(package) = self.parse_directory(dir)? {
                parsed.push(package);
            }
        }

        let packages = resolver::resolve_all(&parsed);
        self.record_packages(&packages);
        info!(
            "Loaded {} packages from {} directories",
            packages.len(),
            directories.len()
        );
        Ok(packages)
    }

    fn can_load(&self, path: &Path) -> bool {
        let is_go = path.extension().is_some_and(|ext| ext == "go");
        let is_test = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with("_test.go"));
        is_go && !is_test
    }

    fn metrics(&self) -> LoadMetrics {
        self.metrics.lock().unwrap().clone()
    }

    fn reset_metrics(&mut self) {
        *self.metrics.lock().unwrap() = LoadMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let loader = GoLoader::new();
        assert_eq!(loader.name(), "go");
    }

    #[test]
    fn test_can_load() {
        let loader = GoLoader::new();
        assert!(loader.can_load(Path::new("main.go")));
        assert!(!loader.can_load(Path::new("main_test.go")));
        assert!(!loader.can_load(Path::new("main.rs")));
        assert!(!loader.can_load(Path::new("go.mod")));
    }

    #[test]
    fn test_default_config() {
        let loader = GoLoader::default();
        assert!(loader.config().parallel);
        assert_eq!(loader.config().max_file_size, 10 * 1024 * 1024);
    }
}
