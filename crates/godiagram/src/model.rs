//! The relation model: every loaded entity, keyed by package path.

use crate::entities::{DefinedType, Entity, Interface, PackageSummary, Struct, TypeAlias};
use crate::extract::{extract_package, ExtractedPackage};
use godiagram_api::{LoadOptions, PackageLoader, SemanticPackage};
use log::{info, warn};
use std::collections::BTreeMap;

/// Entities of one kind: package path, then entity name
pub type PackageMap<T> = BTreeMap<String, BTreeMap<String, T>>;

/// Borrowed view of any entity
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    /// A struct
    Struct(&'a Struct),
    /// An interface
    Interface(&'a Interface),
    /// A defined type
    DefinedType(&'a DefinedType),
    /// A type alias
    TypeAlias(&'a TypeAlias),
}

/// Cross-package entity graph
///
/// Owns every entity of a load. Entities are only added; the one derived
/// property, [`Struct::implemented_interfaces`], is filled by
/// [`classify`](crate::classify::classify), which returns a new model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relations {
    pub(crate) packages: BTreeMap<String, PackageSummary>,
    pub(crate) imports: BTreeMap<String, Vec<PackageSummary>>,
    pub(crate) structs: PackageMap<Struct>,
    pub(crate) interfaces: PackageMap<Interface>,
    pub(crate) defined_types: PackageMap<DefinedType>,
    pub(crate) type_aliases: PackageMap<TypeAlias>,
}

impl Relations {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract every package; implementations are not computed
    ///
    /// A package whose path was already added is skipped.
    pub fn from_packages(packages: &[SemanticPackage]) -> Self {
        let mut relations = Relations::new();
        for package in packages {
            if relations.packages.contains_key(&package.path) {
                warn!("Skipping duplicate package {}", package.path);
                continue;
            }
            relations.insert(extract_package(package));
        }
        relations
    }

    /// Load packages with `loader` and build the classified model
    pub fn load(loader: &dyn PackageLoader, options: &LoadOptions) -> crate::Result<Self> {
        let packages = loader.load(options)?;
        info!(
            "Loaded {} packages with the {} loader",
            packages.len(),
            loader.name()
        );
        Ok(crate::classify::classify(&Relations::from_packages(&packages)))
    }

    /// Add an extracted package
    pub fn insert(&mut self, package: ExtractedPackage) {
        let path = package.summary.path.clone();
        self.imports.insert(path.clone(), package.imports);
        self.packages.insert(path.clone(), package.summary);

        for entity in package.entities {
            let name = entity.name().to_string();
            match entity {
                Entity::Struct(s) => {
                    self.structs.entry(path.clone()).or_default().insert(name, s);
                }
                Entity::Interface(i) => {
                    self.interfaces.entry(path.clone()).or_default().insert(name, i);
                }
                Entity::DefinedType(d) => {
                    self.defined_types.entry(path.clone()).or_default().insert(name, d);
                }
                Entity::TypeAlias(a) => {
                    self.type_aliases.entry(path.clone()).or_default().insert(name, a);
                }
            }
        }
    }

    /// Packages sorted by name, then path
    pub fn packages(&self) -> Vec<&PackageSummary> {
        let mut packages: Vec<_> = self.packages.values().collect();
        packages.sort();
        packages
    }

    /// Package with the given import path
    pub fn package(&self, path: &str) -> Option<&PackageSummary> {
        self.packages.get(path)
    }

    /// Recorded imports of a package
    pub fn imports(&self, path: &str) -> &[PackageSummary] {
        self.imports.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Structs of a package, sorted by name
    pub fn structs(&self, path: &str) -> impl Iterator<Item = &Struct> {
        self.structs.get(path).into_iter().flat_map(|m| m.values())
    }

    /// Interfaces of a package, sorted by name
    pub fn interfaces(&self, path: &str) -> impl Iterator<Item = &Interface> {
        self.interfaces.get(path).into_iter().flat_map(|m| m.values())
    }

    /// Defined types of a package, sorted by name
    pub fn defined_types(&self, path: &str) -> impl Iterator<Item = &DefinedType> {
        self.defined_types.get(path).into_iter().flat_map(|m| m.values())
    }

    /// Type aliases of a package, sorted by name
    pub fn type_aliases(&self, path: &str) -> impl Iterator<Item = &TypeAlias> {
        self.type_aliases.get(path).into_iter().flat_map(|m| m.values())
    }

    /// Every struct in the model
    pub fn all_structs(&self) -> impl Iterator<Item = &Struct> {
        self.structs.values().flat_map(|m| m.values())
    }

    /// Every interface in the model
    pub fn all_interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.values().flat_map(|m| m.values())
    }

    /// Every defined type in the model
    pub fn all_defined_types(&self) -> impl Iterator<Item = &DefinedType> {
        self.defined_types.values().flat_map(|m| m.values())
    }

    /// Every type alias in the model
    pub fn all_type_aliases(&self) -> impl Iterator<Item = &TypeAlias> {
        self.type_aliases.values().flat_map(|m| m.values())
    }

    /// Look up a struct
    pub fn find_struct(&self, path: &str, name: &str) -> Option<&Struct> {
        self.structs.get(path)?.get(name)
    }

    /// Look up an interface
    pub fn find_interface(&self, path: &str, name: &str) -> Option<&Interface> {
        self.interfaces.get(path)?.get(name)
    }

    /// Look up an entity of any kind
    pub fn find(&self, path: &str, name: &str) -> Option<EntityRef<'_>> {
        if let Some(s) = self.find_struct(path, name) {
            return Some(EntityRef::Struct(s));
        }
        if let Some(i) = self.find_interface(path, name) {
            return Some(EntityRef::Interface(i));
        }
        if let Some(d) = self.defined_types.get(path).and_then(|m| m.get(name)) {
            return Some(EntityRef::DefinedType(d));
        }
        self.type_aliases
            .get(path)
            .and_then(|m| m.get(name))
            .map(EntityRef::TypeAlias)
    }

    /// Number of loaded packages
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Number of entities across all packages
    pub fn entity_count(&self) -> usize {
        [
            self.structs.values().map(BTreeMap::len).sum::<usize>(),
            self.interfaces.values().map(BTreeMap::len).sum(),
            self.defined_types.values().map(BTreeMap::len).sum(),
            self.type_aliases.values().map(BTreeMap::len).sum(),
        ]
        .iter()
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use godiagram_api::{GoType, MethodDecl, Signature, StructField, TypeObject};

    fn packages() -> Vec<SemanticPackage> {
        vec![
            SemanticPackage::new("zeta", "example.com/zeta")
                .with_object(TypeObject::defined("Engine", GoType::Struct { fields: vec![] }))
                .with_object(TypeObject::alias("Name", GoType::basic("string"))),
            SemanticPackage::new("alpha", "example.com/b/alpha").with_object(
                TypeObject::defined(
                    "Runner",
                    GoType::Interface {
                        methods: vec![],
                        embeddeds: vec![],
                    },
                ),
            ),
            SemanticPackage::new("alpha", "example.com/a/alpha")
                .with_object(TypeObject::defined(
                    "Cell",
                    GoType::Struct {
                        fields: vec![StructField::new("v", GoType::basic("int"))],
                    },
                ))
                .with_object(TypeObject::defined("Count", GoType::basic("int")))
                .with_method(MethodDecl::new("Cell", "Get", Signature::default())),
        ]
    }

    #[test]
    fn test_packages_sorted_by_name_then_path() {
        let relations = Relations::from_packages(&packages());
        let paths: Vec<_> = relations.packages().iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["example.com/a/alpha", "example.com/b/alpha", "example.com/zeta"]
        );
    }

    #[test]
    fn test_entities_routed_by_kind() {
        let relations = Relations::from_packages(&packages());

        assert_eq!(relations.entity_count(), 5);
        assert_eq!(relations.structs("example.com/a/alpha").count(), 1);
        assert_eq!(relations.defined_types("example.com/a/alpha").count(), 1);
        assert_eq!(relations.interfaces("example.com/b/alpha").count(), 1);
        assert_eq!(relations.type_aliases("example.com/zeta").count(), 1);
        assert_eq!(relations.structs("example.com/missing").count(), 0);

        assert!(matches!(
            relations.find("example.com/a/alpha", "Cell"),
            Some(EntityRef::Struct(s)) if s.methods.len() == 1
        ));
        assert!(matches!(
            relations.find("example.com/zeta", "Name"),
            Some(EntityRef::TypeAlias(_))
        ));
        assert!(relations.find("example.com/zeta", "Cell").is_none());
    }

    #[test]
    fn test_duplicate_package_paths_are_skipped() {
        let mut input = packages();
        input.push(
            SemanticPackage::new("zeta", "example.com/zeta")
                .with_object(TypeObject::defined("Other", GoType::basic("int"))),
        );

        let relations = Relations::from_packages(&input);
        assert_eq!(relations.package_count(), 3);
        assert!(relations.find("example.com/zeta", "Other").is_none());
    }
}
