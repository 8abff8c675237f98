//! Edge derivation for structs, interfaces, defined types and aliases.

use crate::entities::{Interface, Struct};
use crate::model::Relations;
use crate::names::NameTable;
use crate::namer::Type;
use std::collections::BTreeSet;
use std::fmt;

/// Kind of a type-level edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKind {
    /// Embedding: the container absorbs the embedded type
    Composition,
    /// Structural interface satisfaction
    Implementation,
    /// A field type used by a struct
    Aggregation,
    /// A named type over another type
    Alias,
}

impl EdgeKind {
    /// Role label shown when connection labels are enabled
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Composition => "extends",
            EdgeKind::Implementation => "implements",
            EdgeKind::Aggregation => "uses",
            EdgeKind::Alias => "alias of",
        }
    }
}

/// One end of an edge: a type name inside a package namespace
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeEnd {
    /// Namespace; `None` for primitives
    pub package: Option<String>,
    /// Type name
    pub name: String,
}

impl EdgeEnd {
    /// End inside a package namespace
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            name: name.into(),
        }
    }

    /// End without a namespace
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            package: None,
            name: name.into(),
        }
    }

    fn of_type(ty: &Type) -> Self {
        if ty.is_builtin() {
            Self::bare(ty.go_name())
        } else {
            Self::new(ty.package_name(), ty.go_name())
        }
    }
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "{}.{}", package, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Directed edge; `from` is written first
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Edge kind
    pub kind: EdgeKind,
    /// Left-hand end
    pub from: EdgeEnd,
    /// Right-hand end
    pub to: EdgeEnd,
}

impl Edge {
    /// Create an edge
    pub fn new(kind: EdgeKind, from: EdgeEnd, to: EdgeEnd) -> Self {
        Self { kind, from, to }
    }
}

/// Edges contributed by one struct
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructEdges {
    /// `struct *-- embedded`, one per embedded field
    pub compositions: Vec<Edge>,
    /// `interface <|-- struct`, one per implemented interface
    pub implementations: Vec<Edge>,
    /// `dependency o-- struct` from exported fields
    pub aggregations: Vec<Edge>,
    /// Aggregations found only through unexported fields
    pub private_aggregations: Vec<Edge>,
}

/// Derive the edges of one struct
///
/// Embedded fields only compose and named fields only aggregate. Each
/// terminal type is aggregated once per struct, keyed by its canonical name.
pub fn struct_edges(target: &Struct) -> StructEdges {
    let this = EdgeEnd::new(target.package.name.clone(), target.name.clone());
    let mut edges = StructEdges::default();

    for field in target.embedded_fields() {
        edges.compositions.push(Edge::new(
            EdgeKind::Composition,
            this.clone(),
            EdgeEnd::of_type(field.composed_type()),
        ));
    }

    for interface in &target.implemented_interfaces {
        edges.implementations.push(Edge::new(
            EdgeKind::Implementation,
            EdgeEnd::new(interface.package.name.clone(), interface.name.clone()),
            this.clone(),
        ));
    }

    let mut seen = BTreeSet::new();
    let named = || target.fields.iter().filter(|f| !f.embedded);
    for (private, out) in [
        (false, &mut edges.aggregations),
        (true, &mut edges.private_aggregations),
    ] {
        for field in named().filter(|f| f.is_private() == private) {
            for terminal in field.ty.terminal_types() {
                if terminal.is_builtin() || !seen.insert(terminal.key().to_string()) {
                    continue;
                }
                out.push(Edge::new(
                    EdgeKind::Aggregation,
                    EdgeEnd::of_type(terminal),
                    this.clone(),
                ));
            }
        }
    }
    edges
}

/// Composition edges from an interface to its embedded interfaces, sorted by name
pub fn interface_edges(interface: &Interface) -> Vec<Edge> {
    let this = EdgeEnd::new(interface.package.name.clone(), interface.name.clone());
    let mut embedded: Vec<&Type> = interface.embedded.iter().collect();
    embedded.sort_by(|a, b| a.go_name().cmp(b.go_name()));
    embedded
        .into_iter()
        .map(|ty| Edge::new(EdgeKind::Composition, this.clone(), EdgeEnd::of_type(ty)))
        .collect()
}

/// Alias edges of every defined type and type alias over a non-primitive type
///
/// Targets with a synthetic identifier in `names` point at that identifier
/// inside the owning package namespace.
/// Sorted by alias name, owner package name and target name.
pub fn alias_edges(relations: &Relations, names: &NameTable) -> Vec<Edge> {
    let defined = relations
        .all_defined_types()
        .map(|d| (&d.name, &d.package, &d.underlying));
    let aliases = relations
        .all_type_aliases()
        .map(|a| (&a.name, &a.package, &a.underlying));

    let mut keyed: Vec<((&str, &str, &str), Edge)> = defined
        .chain(aliases)
        .filter(|(_, _, underlying)| !underlying.is_builtin())
        .map(|(name, package, underlying)| {
            let target = match names.identifier(&package.path, underlying) {
                Some(id) => EdgeEnd::new(package.name.clone(), id),
                None => EdgeEnd::of_type(underlying),
            };
            let key = (
                name.as_str(),
                package.name.as_str(),
                underlying.go_name(),
            );
            let edge = Edge::new(
                EdgeKind::Alias,
                EdgeEnd::new(package.name.clone(), name.clone()),
                target,
            );
            (key, edge)
        })
        .collect();

    keyed.sort();
    keyed.into_iter().map(|(_, edge)| edge).collect()
}
