use crate::{
    config::LoadOptions,
    errors::{LoadError, LoadResult},
    metrics::LoadMetrics,
    semantic::SemanticPackage,
};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Directory names never descended into during recursive discovery
const SKIPPED_DIRECTORIES: &[&str] = &["vendor", "testdata"];

/// Core trait every package front end implements
///
/// A loader turns directories of source code into fully resolved
/// [`SemanticPackage`]s. Anything that fails to load aborts the whole
/// operation; partial results are never returned.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so directories can be processed in parallel.
///
/// # Example
/// ```rust,ignore
/// use godiagram_api::{LoadOptions, PackageLoader};
///
/// let options = LoadOptions::new(["./cmd", "./internal"]).recursive(true);
/// let packages = loader.load(&options)?;
/// ```
pub trait PackageLoader: Send + Sync {
    /// Loader identifier (e.g. "go")
    fn name(&self) -> &str;

    /// Load every package found directly inside `dir`
    ///
    /// Subdirectories are not visited. A directory without sources yields an
    /// empty list.
    fn load_directory(&self, dir: &Path) -> LoadResult<Vec<SemanticPackage>>;

    /// Load all packages selected by `options`
    ///
    /// Default implementation discovers directories and loads them one by one.
    /// Loaders that resolve types across packages override this to see the
    /// whole package set at once.
    fn load(&self, options: &LoadOptions) -> LoadResult<Vec<SemanticPackage>> {
        let directories = self.discover_directories(options)?;
        info!(
            "Loading {} directories with the {} loader",
            directories.len(),
            self.name()
        );

        let mut packages = Vec::new();
        for dir in &directories {
            let loaded = self.load_directory(dir)?;
            debug!("Loaded {} packages from {}", loaded.len(), dir.display());
            packages.extend(loaded);
        }
        Ok(packages)
    }

    /// Expand `options` into the list of directories to load
    ///
    /// Non-recursive options return the configured directories unchanged.
    /// Recursive discovery walks each directory, skipping hidden,
    /// `_`-prefixed, `vendor` and `testdata` directories as well as
    /// every ignored directory together with its subtree.
    fn discover_directories(&self, options: &LoadOptions) -> LoadResult<Vec<PathBuf>> {
        use walkdir::WalkDir;

        let mut directories = Vec::new();
        for root in &options.directories {
            if !root.is_dir() {
                return Err(LoadError::DirectoryNotFound(root.clone()));
            }

            if !options.recursive {
                directories.push(root.clone());
                continue;
            }

            let walker = WalkDir::new(root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| {
                    if !e.file_type().is_dir() {
                        return false;
                    }
                    if options.is_ignored(e.path()) {
                        return false;
                    }
                    // The root is always visited, even when named like a skipped directory
                    e.depth() == 0 || !is_skipped_directory(e.file_name().to_str())
                });

            for entry in walker {
                let entry = entry.map_err(|e| {
                    let path = e.path().unwrap_or(root.as_path()).to_path_buf();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory loop"));
                    LoadError::IoError(path, source)
                })?;
                directories.push(entry.into_path());
            }
        }
        Ok(directories)
    }

    /// Check if this loader can handle the given file
    ///
    /// Default implementation accepts everything.
    fn can_load(&self, _path: &Path) -> bool {
        true
    }

    /// Get accumulated metrics
    fn metrics(&self) -> LoadMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}

fn is_skipped_directory(name: Option<&str>) -> bool {
    match name {
        Some(name) => {
            name.starts_with('.') || name.starts_with('_') || SKIPPED_DIRECTORIES.contains(&name)
        }
        None => false,
    }
}
