//! # godiagram
//!
//! Class and package diagrams for Go code, rendered as PlantUML.
//!
//! ## Pipeline
//!
//! ```text
//! SemanticPackage (godiagram-api, from a loader or JSON)
//!     ↓  extract
//! Relations (structs, interfaces, defined types, aliases per package)
//!     ↓  classify
//! Relations with implemented interfaces
//!     ↓  render
//! PlantUML element tree → text
//! ```
//!
//! Loading is the only fallible step besides option handling. Rendering is
//! total: absent data yields absent output.
//!
//! ## Example
//!
//! ```rust
//! use godiagram::{ClassDiagram, RenderingOptions};
//! use godiagram_api::{GoType, PackageRef, SemanticPackage, StructField, TypeObject};
//!
//! let writer = GoType::named("Writer", PackageRef::new("io", "io"));
//! let item = GoType::named("Item", PackageRef::new("item", "example.com/item"));
//! let shop = SemanticPackage::new("shop", "example.com/shop").with_object(TypeObject::defined(
//!     "Box",
//!     GoType::Struct {
//!         fields: vec![
//!             StructField::embedded("Writer", writer),
//!             StructField::new("Item", item),
//!         ],
//!     },
//! ));
//!
//! let output = ClassDiagram::from_packages(&[shop], RenderingOptions::default()).render();
//! assert!(output.contains("\"shop.Box\" *-- \"io.Writer\""));
//! assert!(output.contains("\"item.Item\" o-- \"shop.Box\""));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod diagram;
pub mod entities;
pub mod error;
pub mod extract;
pub mod model;
pub mod namer;
pub mod names;
pub mod package_graph;
pub mod plantuml;
pub mod render;

// Re-export main types
pub use classify::{classify, Edge, EdgeEnd, EdgeKind};
pub use config::{OptionValue, RenderingOptions};
pub use diagram::{ClassDiagram, PackageDiagram};
pub use entities::{
    DefinedType, Entity, Field, Function, Interface, InterfaceRef, PackageSummary, Parameter,
    Struct, TypeAlias,
};
pub use error::{ConfigError, DiagramError, Result};
pub use extract::{extract_package, ExtractedPackage};
pub use model::{EntityRef, Relations};
pub use namer::{Type, TypeNamer};
pub use names::{NameEntry, NameTable};
pub use package_graph::PackageGraph;
pub use render::{ClassRenderer, PackageRenderer};
