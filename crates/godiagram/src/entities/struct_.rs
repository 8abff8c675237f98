use super::{Field, Function, InterfaceRef, PackageSummary};
use std::collections::BTreeSet;

/// Struct declaration with its methods
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    /// Declared name
    pub name: String,
    /// Declaring package
    pub package: PackageSummary,
    /// Fields in declaration order
    pub fields: Vec<Field>,
    /// Methods with value or pointer receivers
    pub methods: Vec<Function>,
    /// Interfaces satisfied structurally; filled by classification
    pub implemented_interfaces: BTreeSet<InterfaceRef>,
}

impl Struct {
    /// Create an empty struct
    pub fn new(name: impl Into<String>, package: PackageSummary) -> Self {
        Self {
            name: name.into(),
            package,
            fields: Vec::new(),
            methods: Vec::new(),
            implemented_interfaces: BTreeSet::new(),
        }
    }

    /// Fields declared without a name
    pub fn embedded_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.embedded)
    }
}
