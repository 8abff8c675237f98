//! Diagram-safe identifiers for composite type names.
//!
//! Underlying types such as `map[string]int` cannot be used as diagram
//! identifiers. The [`NameTable`] assigns each one an alphanumeric
//! identifier and keeps the mapping in both directions. It is built once
//! from the model and only read afterwards.

use crate::entities::PackageSummary;
use crate::model::Relations;
use crate::namer::Type;
use std::collections::{BTreeMap, BTreeSet};

/// Strip every character that is not ASCII alphanumeric
pub fn sanitize(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// One registered composite type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    /// Package the identifier belongs to
    pub package: PackageSummary,
    /// Display name of the type (`map[string]Item`)
    pub original: String,
    /// Alphanumeric identifier
    pub identifier: String,
}

/// Composite type to identifier lookup, keyed by package path and the
/// canonical type key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: BTreeMap<(String, String), NameEntry>,
    taken: BTreeSet<String>,
}

impl NameTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the underlying types of defined types and aliases that
    /// reach a primitive
    pub fn from_relations(relations: &Relations) -> Self {
        let mut table = NameTable::new();
        let defined = relations
            .all_defined_types()
            .map(|d| (&d.package, &d.underlying));
        let aliases = relations
            .all_type_aliases()
            .map(|a| (&a.package, &a.underlying));

        for (package, underlying) in defined.chain(aliases) {
            if needs_identifier(underlying) {
                table.register(package, underlying);
            }
        }
        table
    }

    /// Identifier for `ty` in `package`, assigned on first use
    ///
    /// Identifiers are built from the package name and the display name of
    /// the type, and made unique with a numeric suffix.
    pub fn register(&mut self, package: &PackageSummary, ty: &Type) -> &str {
        let key = (package.path.clone(), ty.key().to_string());
        if !self.entries.contains_key(&key) {
            let base = sanitize(&format!("{}{}", package.name, ty.go_name()));
            let mut identifier = base.clone();
            let mut suffix = 2;
            while self.taken.contains(&identifier) {
                identifier = format!("{base}{suffix}");
                suffix += 1;
            }
            self.taken.insert(identifier.clone());
            self.entries.insert(
                key.clone(),
                NameEntry {
                    package: package.clone(),
                    original: ty.go_name().to_string(),
                    identifier,
                },
            );
        }
        &self.entries[&key].identifier
    }

    /// Identifier registered for `ty` in the package at `path`
    pub fn identifier(&self, path: &str, ty: &Type) -> Option<&str> {
        self.entries
            .get(&(path.to_string(), ty.key().to_string()))
            .map(|entry| entry.identifier.as_str())
    }

    /// Registered entries, sorted by package path and type key
    pub fn entries(&self) -> impl Iterator<Item = &NameEntry> {
        self.entries.values()
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn needs_identifier(underlying: &Type) -> bool {
    !underlying.is_builtin()
        && underlying.contains_builtin_terminal()
        && sanitize(underlying.go_name()) != underlying.go_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namer::TypeNamer;
    use godiagram_api::{GoType, PackageRef, SemanticPackage, TypeObject};

    fn kinds() -> PackageSummary {
        PackageSummary::new("kinds", "example.com/kinds")
    }

    fn named(pkg: &PackageSummary, ty: GoType) -> Type {
        TypeNamer::new(pkg).name(&ty)
    }

    fn display(table: &NameTable) -> Vec<(&str, &str, &str)> {
        table
            .entries()
            .map(|e| (e.package.path.as_str(), e.original.as_str(), e.identifier.as_str()))
            .collect()
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("map[string]int"), "mapstringint");
        assert_eq!(sanitize("func(int) (bool, error)"), "funcintboolerror");
        assert_eq!(sanitize("Plain"), "Plain");
    }

    #[test]
    fn test_register_is_idempotent() {
        let pkg = kinds();
        let strings = named(&pkg, GoType::slice(GoType::basic("string")));
        let mut table = NameTable::new();

        assert_eq!(table.register(&pkg, &strings), "kindsstring");
        assert_eq!(table.register(&pkg, &strings), "kindsstring");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_same_display_name_from_different_packages() {
        let a = GoType::named("Item", PackageRef::new("a", "example.com/a"));
        let b = GoType::named("Item", PackageRef::new("b", "example.com/b"));
        let pkg = SemanticPackage::new("k", "example.com/k")
            .with_object(TypeObject::defined("A", GoType::map(GoType::basic("string"), a)))
            .with_object(TypeObject::defined("B", GoType::map(GoType::basic("string"), b)));
        let relations = Relations::from_packages(&[pkg]);

        let table = NameTable::from_relations(&relations);
        let ids: Vec<&str> = table.entries().map(|e| e.identifier.as_str()).collect();
        assert_eq!(table.len(), 2);
        assert_eq!(ids, vec!["kmapstringItem", "kmapstringItem2"]);
        assert!(table.entries().all(|e| e.original == "map[string]Item"));
    }

    #[test]
    fn test_collisions_get_suffixes() {
        let pkg = kinds();
        let pointer = named(&pkg, GoType::pointer(GoType::basic("string")));
        let mut table = NameTable::new();

        table.register(&pkg, &named(&pkg, GoType::slice(GoType::basic("string"))));
        assert_eq!(table.register(&pkg, &pointer), "kindsstring2");
        assert_eq!(
            table.register(&pkg, &named(&pkg, GoType::chan(GoType::basic("string")))),
            "kindschanstring"
        );
        assert_eq!(table.identifier("example.com/kinds", &pointer), Some("kindsstring2"));
        assert_eq!(table.identifier("example.com/other", &pointer), None);
    }

    #[test]
    fn test_from_relations() {
        let item = GoType::named("Item", PackageRef::new("item", "example.com/item"));
        let pkg = SemanticPackage::new("kinds", "example.com/kinds")
            .with_object(TypeObject::defined("Celsius", GoType::basic("float64")))
            .with_object(TypeObject::defined(
                "Index",
                GoType::map(GoType::basic("string"), item.clone()),
            ))
            .with_object(TypeObject::alias("Items", GoType::slice(item)));
        let relations = Relations::from_packages(&[pkg]);

        let table = NameTable::from_relations(&relations);
        assert_eq!(
            display(&table),
            vec![("example.com/kinds", "map[string]Item", "kindsmapstringItem")]
        );
    }
}
