use super::{Function, PackageSummary};
use crate::namer::Type;

/// Named type over a shape that is neither struct nor interface
#[derive(Debug, Clone, PartialEq)]
pub struct DefinedType {
    /// Declared name
    pub name: String,
    /// Declaring package
    pub package: PackageSummary,
    /// Underlying type
    pub underlying: Type,
    /// Declared methods
    pub methods: Vec<Function>,
}

impl DefinedType {
    /// Create a defined type without methods
    pub fn new(name: impl Into<String>, package: PackageSummary, underlying: Type) -> Self {
        Self {
            name: name.into(),
            package,
            underlying,
            methods: Vec::new(),
        }
    }
}
