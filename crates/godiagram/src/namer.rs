//! Canonical naming of semantic type references.
//!
//! Every [`GoType`] reaching the relation model passes through the
//! [`TypeNamer`], which produces a [`Type`]: the display name, the name
//! qualified relative to the package currently being described, a canonical
//! path-qualified key used for equality, and the terminal types reachable by
//! unwrapping container shapes.

use crate::entities::PackageSummary;
use godiagram_api::{GoType, InterfaceMethod, Param, PackageRef, Signature, StructField};

/// Names declared in the universe scope
const UNIVERSE_TYPES: &[&str] = &[
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

/// Whether `name` is a predeclared (universe) type name
pub fn is_builtin(name: &str) -> bool {
    UNIVERSE_TYPES.contains(&name)
}

/// A named view of a semantic type, relative to one package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    go_name: String,
    qualified_name: String,
    key: String,
    package: Option<PackageSummary>,
    builtin: bool,
    terminals: Vec<Type>,
}

impl Type {
    /// Display name; named types appear bare (`[]Item`, `*Writer`)
    pub fn go_name(&self) -> &str {
        &self.go_name
    }

    /// Name qualified relative to the current package (`[]item.Item`)
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Canonical key, qualified by package path; equal keys mean identical types
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Owning package: the declaring package for named types, the current
    /// package for composite shapes and `None` for builtins
    pub fn package(&self) -> Option<&PackageSummary> {
        self.package.as_ref()
    }

    /// Owning package name, empty for builtins
    pub fn package_name(&self) -> &str {
        self.package.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    /// Whether this is a predeclared type
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    /// Named and primitive leaves reachable through pointers, slices, arrays,
    /// maps, channels and signatures
    pub fn terminal_types(&self) -> &[Type] {
        &self.terminals
    }

    /// Whether any terminal type is primitive
    pub fn contains_builtin_terminal(&self) -> bool {
        self.terminals.iter().any(Type::is_builtin)
    }
}

/// Names [`GoType`]s relative to a current package
#[derive(Debug, Clone, Copy)]
pub struct TypeNamer<'a> {
    current: &'a PackageSummary,
}

impl<'a> TypeNamer<'a> {
    /// Create a namer for types seen from `current`
    pub fn new(current: &'a PackageSummary) -> Self {
        Self { current }
    }

    /// Name `ty` and collect its terminal types
    pub fn name(&self, ty: &GoType) -> Type {
        let mut leaf = self.leaf(ty);
        let mut terminals = Vec::new();
        self.collect_terminals(ty, &mut terminals);
        leaf.terminals = terminals;
        leaf
    }

    /// Named view without terminal types
    fn leaf(&self, ty: &GoType) -> Type {
        let go_name = self.render(ty, false);
        let builtin = match ty {
            GoType::Named { package: None, .. } => true,
            _ => is_builtin(&go_name),
        };
        let package = match ty {
            _ if builtin => None,
            GoType::Named {
                package: Some(pkg), ..
            } => Some(PackageSummary::from(pkg)),
            _ => Some(self.current.clone()),
        };

        Type {
            qualified_name: self.render(ty, true),
            key: canonical_key(ty),
            go_name,
            package,
            builtin,
            terminals: Vec::new(),
        }
    }

    fn collect_terminals(&self, ty: &GoType, out: &mut Vec<Type>) {
        match ty {
            GoType::Basic { .. } | GoType::Named { .. } => out.push(self.leaf(ty)),
            GoType::Pointer { elem }
            | GoType::Slice { elem }
            | GoType::Array { elem }
            | GoType::Chan { elem } => self.collect_terminals(elem, out),
            GoType::Map { key, value } => {
                self.collect_terminals(key, out);
                self.collect_terminals(value, out);
            }
            GoType::Signature(sig) => {
                for p in sig.params.iter().chain(&sig.results) {
                    self.collect_terminals(&p.ty, out);
                }
            }
            // Implied contained types of anonymous literals are not tracked
            GoType::Struct { .. }
            | GoType::Interface { .. }
            | GoType::Tuple { .. }
            | GoType::TypeParam { .. } => {}
        }
    }

    fn render(&self, ty: &GoType, qualify: bool) -> String {
        match ty {
            GoType::Basic { name } | GoType::TypeParam { name } => name.clone(),
            GoType::Named { name, package } => match package {
                Some(pkg) if qualify && pkg.path != self.current.path && !is_builtin(name) => {
                    format!("{}.{}", pkg.name, name)
                }
                _ => name.clone(),
            },
            GoType::Pointer { elem } => format!("*{}", self.render(elem, qualify)),
            GoType::Slice { elem } | GoType::Array { elem } => {
                format!("[]{}", self.render(elem, qualify))
            }
            GoType::Chan { elem } => format!("chan {}", self.render(elem, qualify)),
            GoType::Map { key, value } => format!(
                "map[{}]{}",
                self.render(key, qualify),
                self.render(value, qualify)
            ),
            // Signatures always spell out qualified parameter and result types
            GoType::Signature(sig) => self.render_signature(sig),
            GoType::Struct { fields } => self.render_struct(fields, qualify),
            GoType::Interface { methods, .. } => self.render_interface(methods),
            GoType::Tuple { .. } => String::new(),
        }
    }

    fn render_signature(&self, sig: &Signature) -> String {
        let params = self.join(&sig.params);
        match sig.results.len() {
            0 => format!("func({params})"),
            1 => format!("func({params}) {}", self.render(&sig.results[0].ty, true)),
            _ => format!("func({params}) ({})", self.join(&sig.results)),
        }
    }

    fn render_struct(&self, fields: &[StructField], qualify: bool) -> String {
        let fields: Vec<String> = fields.iter().map(|f| self.render(&f.ty, qualify)).collect();
        format!("struct{{{}}}", fields.join(", "))
    }

    fn render_interface(&self, methods: &[InterfaceMethod]) -> String {
        let methods: Vec<String> = methods
            .iter()
            .map(|m| format!("{} {}", m.name, self.render_signature(&m.signature)))
            .collect();
        format!("interface{{{}}}", methods.join("; "))
    }

    fn join(&self, params: &[Param]) -> String {
        params
            .iter()
            .map(|p| self.render(&p.ty, true))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Path-qualified identity of a type
fn canonical_key(ty: &GoType) -> String {
    match ty {
        GoType::Basic { name } => name.clone(),
        GoType::TypeParam { name } => format!("${name}"),
        GoType::Named { name, package } => match package {
            Some(PackageRef { path, .. }) => format!("{path}.{name}"),
            None => name.clone(),
        },
        GoType::Pointer { elem } => format!("*{}", canonical_key(elem)),
        GoType::Slice { elem } => format!("[]{}", canonical_key(elem)),
        GoType::Array { elem } => format!("[#]{}", canonical_key(elem)),
        GoType::Chan { elem } => format!("chan {}", canonical_key(elem)),
        GoType::Map { key, value } => {
            format!("map[{}]{}", canonical_key(key), canonical_key(value))
        }
        GoType::Signature(sig) => signature_key(sig),
        GoType::Struct { fields } => {
            let fields: Vec<String> = fields
                .iter()
                .map(|f| {
                    let name = if f.embedded { "" } else { f.name.as_str() };
                    format!("{name} {}", canonical_key(&f.ty))
                })
                .collect();
            format!("struct{{{}}}", fields.join("; "))
        }
        GoType::Interface { methods, embeddeds } => {
            let mut parts: Vec<String> = methods
                .iter()
                .map(|m| format!("{}{}", m.name, signature_key(&m.signature)))
                .collect();
            parts.extend(embeddeds.iter().map(canonical_key));
            parts.sort();
            format!("interface{{{}}}", parts.join("; "))
        }
        GoType::Tuple { elems } => {
            let elems: Vec<String> = elems.iter().map(canonical_key).collect();
            format!("({})", elems.join(", "))
        }
    }
}

fn signature_key(sig: &Signature) -> String {
    let params: Vec<String> = sig.params.iter().map(|p| canonical_key(&p.ty)).collect();
    let results: Vec<String> = sig.results.iter().map(|p| canonical_key(&p.ty)).collect();
    format!("func({})({})", params.join(", "), results.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> PackageSummary {
        PackageSummary::new("shop", "example.com/shop")
    }

    fn item() -> GoType {
        GoType::named("Item", PackageRef::new("item", "example.com/shop/item"))
    }

    fn local(name: &str) -> GoType {
        GoType::named(name, PackageRef::new("shop", "example.com/shop"))
    }

    #[test]
    fn test_basic_types_are_never_qualified() {
        let pkg = current();
        let t = TypeNamer::new(&pkg).name(&GoType::basic("string"));

        assert_eq!(t.go_name(), "string");
        assert_eq!(t.qualified_name(), "string");
        assert!(t.is_builtin());
        assert!(t.package().is_none());
        assert_eq!(t.terminal_types().len(), 1);
    }

    #[test]
    fn test_named_type_qualification() {
        let pkg = current();
        let namer = TypeNamer::new(&pkg);

        let foreign = namer.name(&item());
        assert_eq!(foreign.go_name(), "Item");
        assert_eq!(foreign.qualified_name(), "item.Item");
        assert_eq!(foreign.package_name(), "item");
        assert_eq!(foreign.key(), "example.com/shop/item.Item");

        let own = namer.name(&local("Cart"));
        assert_eq!(own.qualified_name(), "Cart");
        assert!(!own.is_builtin());
    }

    #[test]
    fn test_containers() {
        let pkg = current();
        let namer = TypeNamer::new(&pkg);

        assert_eq!(namer.name(&GoType::pointer(item())).go_name(), "*Item");
        assert_eq!(
            namer.name(&GoType::slice(GoType::pointer(item()))).qualified_name(),
            "[]*item.Item"
        );
        assert_eq!(
            namer.name(&GoType::array(GoType::basic("byte"))).go_name(),
            "[]byte"
        );
        assert_eq!(
            namer.name(&GoType::chan(GoType::basic("error"))).go_name(),
            "chan error"
        );
        assert_eq!(
            namer
                .name(&GoType::map(GoType::basic("string"), item()))
                .qualified_name(),
            "map[string]item.Item"
        );
    }

    #[test]
    fn test_container_belongs_to_current_package() {
        let pkg = current();
        let t = TypeNamer::new(&pkg).name(&GoType::slice(item()));

        assert!(!t.is_builtin());
        assert_eq!(t.package(), Some(&pkg));
    }

    #[test]
    fn test_signature_names() {
        let pkg = current();
        let namer = TypeNamer::new(&pkg);

        let none = GoType::Signature(Signature::new(
            vec![Param::new("i", item())],
            vec![],
        ));
        assert_eq!(namer.name(&none).go_name(), "func(item.Item)");

        let one = GoType::Signature(Signature::new(
            vec![Param::new("a", GoType::basic("int")), Param::new("b", local("Cart"))],
            vec![Param::unnamed(GoType::basic("error"))],
        ));
        assert_eq!(namer.name(&one).go_name(), "func(int, Cart) error");

        let many = GoType::Signature(Signature::new(
            vec![],
            vec![Param::unnamed(item()), Param::unnamed(GoType::basic("bool"))],
        ));
        assert_eq!(namer.name(&many).go_name(), "func() (item.Item, bool)");
    }

    #[test]
    fn test_literals() {
        let pkg = current();
        let namer = TypeNamer::new(&pkg);

        let st = GoType::Struct {
            fields: vec![
                StructField::new("a", GoType::basic("int")),
                StructField::new("b", item()),
            ],
        };
        let t = namer.name(&st);
        assert_eq!(t.go_name(), "struct{int, Item}");
        assert!(t.terminal_types().is_empty());

        let iface = GoType::Interface {
            methods: vec![InterfaceMethod::new(
                "Len",
                Signature::new(vec![], vec![Param::unnamed(GoType::basic("int"))]),
            )],
            embeddeds: vec![],
        };
        assert_eq!(namer.name(&iface).go_name(), "interface{Len func() int}");
    }

    #[test]
    fn test_terminal_types() {
        let pkg = current();
        let namer = TypeNamer::new(&pkg);

        let ty = GoType::map(
            GoType::basic("string"),
            GoType::slice(GoType::pointer(item())),
        );
        let t = namer.name(&ty);
        let names: Vec<_> = t.terminal_types().iter().map(Type::qualified_name).collect();
        assert_eq!(names, vec!["string", "item.Item"]);
        assert!(t.contains_builtin_terminal());

        let sig = GoType::Signature(Signature::new(
            vec![Param::new("c", local("Cart"))],
            vec![Param::unnamed(GoType::basic("error"))],
        ));
        let names: Vec<_> = namer
            .name(&sig)
            .terminal_types()
            .iter()
            .map(|t| t.go_name().to_string())
            .collect();
        assert_eq!(names, vec!["Cart", "error"]);
    }

    #[test]
    fn test_type_params_are_opaque() {
        let pkg = current();
        let t = TypeNamer::new(&pkg).name(&GoType::slice(GoType::TypeParam {
            name: "T".to_string(),
        }));

        assert_eq!(t.go_name(), "[]T");
        assert!(t.terminal_types().is_empty());
    }

    #[test]
    fn test_keys_distinguish_same_named_packages() {
        let pkg = current();
        let namer = TypeNamer::new(&pkg);

        let a = namer.name(&GoType::named("Item", PackageRef::new("item", "a/item")));
        let b = namer.name(&GoType::named("Item", PackageRef::new("item", "b/item")));

        assert_eq!(a.qualified_name(), b.qualified_name());
        assert_ne!(a.key(), b.key());
    }
}
