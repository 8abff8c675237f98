use super::PackageSummary;
use crate::namer::Type;

/// Transparent renaming of another type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    /// Declared name
    pub name: String,
    /// Declaring package
    pub package: PackageSummary,
    /// Aliased type
    pub underlying: Type,
}

impl TypeAlias {
    /// Create an alias
    pub fn new(name: impl Into<String>, package: PackageSummary, underlying: Type) -> Self {
        Self {
            name: name.into(),
            package,
            underlying,
        }
    }
}
