//! Import graph between loaded packages.

use crate::model::Relations;
use std::collections::{BTreeMap, BTreeSet};

/// Paths that stand for "no package"
const PSEUDO_PACKAGES: &[&str] = &["", "."];

/// Adjacency of package import paths
///
/// Only loaded packages appear: imports of anything outside the load are
/// dropped, as are self-imports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl PackageGraph {
    /// Build the graph from the recorded imports of every loaded package
    pub fn from_relations(relations: &Relations) -> Self {
        let mut adjacency = BTreeMap::new();
        for package in relations.packages() {
            if PSEUDO_PACKAGES.contains(&package.path.as_str()) {
                continue;
            }
            let imports: BTreeSet<String> = relations
                .imports(&package.path)
                .iter()
                .filter(|i| i.path != package.path)
                .filter(|i| !PSEUDO_PACKAGES.contains(&i.path.as_str()))
                .filter(|i| relations.package(&i.path).is_some())
                .map(|i| i.path.clone())
                .collect();
            adjacency.insert(package.path.clone(), imports);
        }
        Self { adjacency }
    }

    /// Package paths, sorted
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Loaded packages imported by `path`, sorted
    pub fn imports_of(&self, path: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(path)
            .into_iter()
            .flat_map(|imports| imports.iter().map(String::as_str))
    }

    /// `(importer, imported)` pairs, sorted
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adjacency.iter().flat_map(|(from, imports)| {
            imports.iter().map(move |to| (from.as_str(), to.as_str()))
        })
    }

    /// Whether `from` imports `to`
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|imports| imports.contains(to))
    }

    /// Number of packages
    pub fn package_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of import edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }
}
