use godiagram_api::PackageRef;

/// Identity of an analyzed package
///
/// `path` is unique across a load; `name` is not. Ordering is by name, then path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageSummary {
    /// Declared package name
    pub name: String,
    /// Import path
    pub path: String,
}

impl PackageSummary {
    /// Create a package identity
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl From<&PackageRef> for PackageSummary {
    fn from(package: &PackageRef) -> Self {
        Self::new(package.name.clone(), package.path.clone())
    }
}
