use super::{Function, PackageSummary};
use crate::namer::Type;

/// Reference to an interface by package and name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterfaceRef {
    /// Declaring package
    pub package: PackageSummary,
    /// Interface name
    pub name: String,
}

impl InterfaceRef {
    /// Create a reference
    pub fn new(package: PackageSummary, name: impl Into<String>) -> Self {
        Self {
            package,
            name: name.into(),
        }
    }
}

/// Interface declaration
///
/// Embedded interfaces are kept apart from the declared methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    /// Declared name
    pub name: String,
    /// Declaring package
    pub package: PackageSummary,
    /// Explicitly declared methods
    pub methods: Vec<Function>,
    /// Embedded interfaces
    pub embedded: Vec<Type>,
    /// Has union or approximation elements; such interfaces only constrain type parameters
    pub type_set: bool,
}

impl Interface {
    /// Create an empty interface
    pub fn new(name: impl Into<String>, package: PackageSummary) -> Self {
        Self {
            name: name.into(),
            package,
            methods: Vec::new(),
            embedded: Vec::new(),
            type_set: false,
        }
    }

    /// Reference to this interface
    pub fn reference(&self) -> InterfaceRef {
        InterfaceRef::new(self.package.clone(), self.name.clone())
    }
}
