//! `go.mod` discovery and import path computation

use godiagram_api::{LoadError, LoadResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

const MODULE_FILE: &str = "go.mod";

/// A Go module: its root directory and declared module path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    pub root: PathBuf,
    pub path: String,
}

impl GoModule {
    /// Find the nearest `go.mod` at or above `dir`
    ///
    /// A `go.mod` without a module directive is treated as absent.
    pub fn find(dir: &Path) -> LoadResult<Option<GoModule>> {
        for root in dir.ancestors() {
            let candidate = root.join(MODULE_FILE);
            if !candidate.is_file() {
                continue;
            }
            let contents = fs::read_to_string(&candidate)
                .map_err(|e| LoadError::IoError(candidate.clone(), e))?;
            return Ok(parse_module_path(&contents).map(|path| GoModule {
                root: root.to_path_buf(),
                path,
            }));
        }
        Ok(None)
    }

    /// Import path of the package in `dir`, which must lie inside the module
    pub fn import_path(&self, dir: &Path) -> String {
        let relative = dir.strip_prefix(&self.root).unwrap_or(dir);
        let segments = slash_path(relative);
        if segments.is_empty() {
            self.path.clone()
        } else {
            format!("{}/{}", self.path, segments)
        }
    }
}

/// Import path of the package in `dir`
///
/// Inside a module, the module path joined with the relative directory;
/// otherwise the directory as given.
pub fn import_path(dir: &Path) -> LoadResult<String> {
    Ok(match GoModule::find(dir)? {
        Some(module) => module.import_path(dir),
        None => {
            let path = slash_path(dir);
            if path.is_empty() {
                ".".to_string()
            } else {
                path
            }
        }
    })
}

/// Module path declared by a `go.mod` file
pub fn parse_module_path(contents: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let line = match line.find("//") {
            Some(comment) => &line[..comment],
            None => line,
        };
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_matches('"');
        (!path.is_empty()).then(|| path.to_string())
    })
}

/// `/`-joined normal components of `path`, dropping `.` components
fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            Component::RootDir => Some(String::new()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
