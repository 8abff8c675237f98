//! # godiagram-go
//!
//! Go front end for godiagram - turns directories of Go source code into
//! resolved [`SemanticPackage`]s.
//!
//! ## Features
//!
//! - Parse Go source files with tree-sitter, skipping `_test.go` files
//! - Compute import paths from the enclosing `go.mod`
//! - Resolve identifiers through type parameters, package scope, imports and the universe
//! - Resolve underlying types across every package of one load
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use godiagram_go::GoLoader;
//! use godiagram_api::{LoadOptions, PackageLoader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = GoLoader::new();
//! let packages = loader.load(&LoadOptions::new(["./internal"]).recursive(true))?;
//! println!("Loaded {} packages", packages.len());
//! # Ok(())
//! # }
//! ```

mod extractor;
mod loader;
mod module;
mod resolver;
mod syntax;
mod visitor;

// Re-export api types for convenience
pub use godiagram_api::{
    LoadError, LoadMetrics, LoadOptions, LoadResult, PackageLoader, SemanticPackage,
};

pub use loader::{GoLoader, GoLoaderConfig};
pub use module::{import_path, parse_module_path, GoModule};
pub use resolver::guess_package_name;
