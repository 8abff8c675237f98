//! Normalized entities of the relation model.
//!
//! Every top-level type declaration of a package becomes exactly one
//! [`Entity`]; which variant is decided once, during extraction.

mod defined_type;
mod field;
mod function;
mod interface;
mod package;
mod struct_;
mod type_alias;

pub use defined_type::DefinedType;
pub use field::{is_private, Field};
pub use function::{Function, Parameter};
pub use interface::{Interface, InterfaceRef};
pub use package::PackageSummary;
pub use struct_::Struct;
pub use type_alias::TypeAlias;

/// One declared type, classified by its underlying shape
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// Struct body
    Struct(Struct),
    /// Interface body
    Interface(Interface),
    /// New named type over any other shape
    DefinedType(DefinedType),
    /// Transparent renaming
    TypeAlias(TypeAlias),
}

impl Entity {
    /// Declared name
    pub fn name(&self) -> &str {
        match self {
            Entity::Struct(s) => &s.name,
            Entity::Interface(i) => &i.name,
            Entity::DefinedType(d) => &d.name,
            Entity::TypeAlias(a) => &a.name,
        }
    }

    /// Declaring package
    pub fn package(&self) -> &PackageSummary {
        match self {
            Entity::Struct(s) => &s.package,
            Entity::Interface(i) => &i.package,
            Entity::DefinedType(d) => &d.package,
            Entity::TypeAlias(a) => &a.package,
        }
    }
}
