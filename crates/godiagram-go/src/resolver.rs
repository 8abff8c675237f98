//! Binding of parsed declarations to packages.
//!
//! Resolution sees every package of one load at once, so named types are
//! followed across package boundaries when computing underlying types.
//! References to packages outside the load stay [`GoType::Named`].

use crate::syntax::{FuncExpr, ParamExpr, ParsedFile, ParsedPackage, TypeExpr, TypeSpec};
use godiagram_api::{
    GoType, Import, InterfaceMethod, MethodDecl, PackageRef, Param, SemanticPackage, Signature,
    StructField, TypeObject,
};
use log::debug;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Predeclared type names of the universe scope
const UNIVERSE: &[&str] = &[
    "any",
    "bool",
    "byte",
    "comparable",
    "complex128",
    "complex64",
    "error",
    "float32",
    "float64",
    "int",
    "int16",
    "int32",
    "int64",
    "int8",
    "rune",
    "string",
    "uint",
    "uint16",
    "uint32",
    "uint64",
    "uint8",
    "uintptr",
];

/// Resolve every package of one load
pub fn resolve_all(packages: &[ParsedPackage]) -> Vec<SemanticPackage> {
    let resolver = Resolver::new(packages);
    packages
        .par_iter()
        .map(|package| resolver.resolve_package(package))
        .collect()
}

/// Declared name of the package at an import path outside the load
///
/// The last path segment, skipping a trailing `vN` segment and dropping
/// `.vN` suffixes, `go-` prefixes and `-go` suffixes.
pub fn guess_package_name(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() > 1 && segments.last().is_some_and(|s| is_major_version(s)) {
        segments.pop();
    }
    let last = segments.last().copied().unwrap_or(path);
    let last = match last.rfind(".v") {
        Some(index) if is_major_version(&last[index + 1..]) => &last[..index],
        _ => last,
    };
    let last = last.strip_prefix("go-").unwrap_or(last);
    let last = last.strip_suffix("-go").unwrap_or(last);
    last.to_string()
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

struct Declaration<'a> {
    package: &'a ParsedPackage,
    file: &'a ParsedFile,
    spec: &'a TypeSpec,
}

/// Where an identifier is looked up
#[derive(Clone, Copy)]
struct Scope<'a> {
    package: &'a ParsedPackage,
    file: &'a ParsedFile,
    type_params: &'a [String],
}

impl Scope<'_> {
    fn package_ref(&self) -> PackageRef {
        PackageRef::new(&self.package.name, &self.package.path)
    }
}

pub struct Resolver<'a> {
    packages: HashMap<&'a str, &'a ParsedPackage>,
    declarations: HashMap<&'a str, HashMap<&'a str, Declaration<'a>>>,
}

impl<'a> Resolver<'a> {
    pub fn new(packages: &'a [ParsedPackage]) -> Self {
        let mut by_path = HashMap::new();
        let mut declarations: HashMap<&str, HashMap<&str, Declaration>> = HashMap::new();
        for package in packages {
            by_path.entry(package.path.as_str()).or_insert(package);
            let scope = declarations.entry(package.path.as_str()).or_default();
            for (file, spec) in package.types() {
                scope.insert(
                    spec.name.as_str(),
                    Declaration {
                        package,
                        file,
                        spec,
                    },
                );
            }
        }
        Self {
            packages: by_path,
            declarations,
        }
    }

    /// Resolve one parsed package into its semantic form
    pub fn resolve_package(&self, package: &ParsedPackage) -> SemanticPackage {
        let mut semantic = SemanticPackage::new(&package.name, &package.path);
        semantic.imports = self.imports(package);

        for (file, spec) in package.types() {
            let scope = Scope {
                package,
                file,
                type_params: &spec.type_params,
            };
            let mut visiting = HashSet::new();
            visiting.insert((package.path.clone(), spec.name.clone()));
            semantic.objects.push(TypeObject {
                name: spec.name.clone(),
                alias: spec.alias,
                underlying: self.underlying(scope, &spec.ty, &mut visiting),
            });
        }

        for (file, method) in package.methods() {
            let scope = Scope {
                package,
                file,
                type_params: &method.type_params,
            };
            semantic.methods.push(MethodDecl {
                receiver: method.receiver.clone(),
                pointer_receiver: method.pointer_receiver,
                name: method.name.clone(),
                signature: self.signature(scope, &method.func),
            });
        }

        debug!(
            "Resolved package {} ({} types, {} methods, {} imports)",
            semantic.path,
            semantic.objects.len(),
            semantic.methods.len(),
            semantic.imports.len()
        );
        semantic
    }

    fn lookup(&self, path: &str, name: &str) -> Option<&Declaration<'a>> {
        self.declarations.get(path)?.get(name)
    }

    /// Imports of every file, deduplicated and sorted
    fn imports(&self, package: &ParsedPackage) -> Vec<Import> {
        let imports: BTreeSet<Import> = package
            .files
            .iter()
            .flat_map(|file| &file.imports)
            .map(|spec| {
                let import = Import::new(&spec.path, self.package_name(&spec.path));
                match &spec.alias {
                    Some(alias) => import.with_alias(alias),
                    None => import,
                }
            })
            .collect();
        imports.into_iter().collect()
    }

    fn package_name(&self, path: &str) -> String {
        match self.packages.get(path) {
            Some(package) => package.name.clone(),
            None => guess_package_name(path),
        }
    }

    /// Resolve `expr` and follow named types declared in the load
    fn underlying(
        &self,
        scope: Scope,
        expr: &TypeExpr,
        visiting: &mut HashSet<(String, String)>,
    ) -> GoType {
        let resolved = self.resolve(scope, expr);
        let target = match &resolved {
            GoType::Named {
                name,
                package: Some(package),
            } => self
                .lookup(&package.path, name)
                .map(|decl| (decl, (package.path.clone(), name.clone()))),
            _ => None,
        };
        let Some((decl, key)) = target else {
            return resolved;
        };
        if !visiting.insert(key) {
            return resolved;
        }

        let scope = Scope {
            package: decl.package,
            file: decl.file,
            type_params: &decl.spec.type_params,
        };
        self.underlying(scope, &decl.spec.ty, visiting)
    }

    fn resolve(&self, scope: Scope, expr: &TypeExpr) -> GoType {
        match expr {
            TypeExpr::Name(name) => self.identifier(scope, name),
            TypeExpr::Qualified { package, name } => self.qualified(scope, package, name),
            TypeExpr::Pointer(elem) => GoType::pointer(self.resolve(scope, elem)),
            TypeExpr::Slice(elem) => GoType::slice(self.resolve(scope, elem)),
            TypeExpr::Array(elem) => GoType::array(self.resolve(scope, elem)),
            TypeExpr::Map(key, value) => {
                GoType::map(self.resolve(scope, key), self.resolve(scope, value))
            }
            TypeExpr::Chan(elem) => GoType::chan(self.resolve(scope, elem)),
            TypeExpr::Func(func) => GoType::Signature(self.signature(scope, func)),
            TypeExpr::Struct(fields) => GoType::Struct {
                fields: fields
                    .iter()
                    .map(|field| StructField {
                        name: field.name.clone(),
                        ty: self.resolve(scope, &field.ty),
                        embedded: field.embedded,
                    })
                    .collect(),
            },
            TypeExpr::Interface { methods, embeddeds } => GoType::Interface {
                methods: methods
                    .iter()
                    .map(|m| InterfaceMethod::new(&m.name, self.signature(scope, &m.func)))
                    .collect(),
                embeddeds: embeddeds.iter().map(|e| self.resolve(scope, e)).collect(),
            },
            TypeExpr::Union(terms) => GoType::Tuple {
                elems: terms.iter().map(|t| self.resolve(scope, t)).collect(),
            },
            TypeExpr::Approx(term) => GoType::Tuple {
                elems: vec![self.resolve(scope, term)],
            },
            TypeExpr::Unknown => GoType::Tuple { elems: Vec::new() },
        }
    }

    /// Type parameters, then package declarations, then the universe
    fn identifier(&self, scope: Scope, name: &str) -> GoType {
        if scope.type_params.iter().any(|p| p == name) {
            return GoType::TypeParam {
                name: name.to_string(),
            };
        }
        if self.lookup(&scope.package.path, name).is_none() && UNIVERSE.contains(&name) {
            return GoType::basic(name);
        }
        GoType::named(name, scope.package_ref())
    }

    fn qualified(&self, scope: Scope, qualifier: &str, name: &str) -> GoType {
        let package = scope
            .file
            .imports
            .iter()
            .find_map(|spec| {
                let declared = self.package_name(&spec.path);
                let visible = spec.alias.as_deref().unwrap_or(&declared);
                (visible == qualifier).then(|| PackageRef::new(declared.clone(), spec.path.clone()))
            })
            .unwrap_or_else(|| PackageRef::new(qualifier, qualifier));
        GoType::named(name, package)
    }

    fn signature(&self, scope: Scope, func: &FuncExpr) -> Signature {
        let params = |list: &[ParamExpr]| -> Vec<Param> {
            list.iter()
                .map(|p| Param::new(&p.name, self.resolve(scope, &p.ty)))
                .collect()
        };
        Signature::new(params(&func.params), params(&func.results))
    }
}
