//! godiagram API
//!
//! Shared semantic model and loader trait for godiagram front ends.
//!
//! This crate is the seam between whatever understands Go source code and the
//! relation model builder in `godiagram`. It defines:
//!
//! - **Semantic model**: fully resolved packages, type declarations, methods and imports
//! - **PackageLoader trait**: the interface every front end implements
//! - **Load options**: which directories to read and how to walk them
//! - **Metrics**: loading statistics
//! - **Error handling**: load failures
//! - **JSON**: serialized form of the semantic model
//!
//! # Example
//!
//! ```rust
//! use godiagram_api::{GoType, MethodDecl, Param, SemanticPackage, Signature, StructField, TypeObject};
//!
//! let pkg = SemanticPackage::new("store", "example.com/app/store");
//! let pkg_ref = pkg.package_ref();
//! let pkg = pkg
//!     .with_object(TypeObject::defined(
//!         "Cache",
//!         GoType::Struct {
//!             fields: vec![StructField::new("entries", GoType::map(GoType::basic("string"), GoType::basic("int")))],
//!         },
//!     ))
//!     .with_method(MethodDecl::new(
//!         "Cache",
//!         "Get",
//!         Signature::new(
//!             vec![Param::new("key", GoType::basic("string"))],
//!             vec![Param::unnamed(GoType::basic("int"))],
//!         ),
//!     ));
//!
//! assert_eq!(pkg.objects.len(), 1);
//! assert_eq!(pkg_ref.name, "store");
//! ```

pub mod config;
pub mod errors;
pub mod json;
pub mod metrics;
pub mod semantic;
pub mod traits;

// Re-export commonly used types
pub use config::LoadOptions;
pub use errors::{LoadError, LoadResult};
pub use metrics::LoadMetrics;
pub use semantic::{
    GoType, Import, InterfaceMethod, MethodDecl, PackageRef, Param, SemanticPackage, Signature,
    StructField, TypeObject,
};
pub use traits::PackageLoader;

#[cfg(test)]
mod tests;
