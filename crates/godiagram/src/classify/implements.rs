//! Structural interface satisfaction.
//!
//! An interface's required set is its declared methods plus, transitively,
//! those of every embedded interface. A struct's method set is its own
//! methods plus methods promoted through embedded fields, shallower
//! declarations shadowing deeper ones. Receiver kind is ignored.

use crate::entities::{Function, Interface, InterfaceRef, Struct};
use crate::model::{EntityRef, Relations};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Signature key of `Error() string`
const ERROR_SIGNATURE: &str = "()(string)";

/// Method names mapped to signature keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    methods: BTreeMap<String, String>,
}

impl MethodSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method unless one with the same name is already present
    pub fn insert(&mut self, function: &Function) {
        self.insert_key(&function.name, function.signature_key());
    }

    fn insert_key(&mut self, name: &str, key: impl Into<String>) {
        self.methods
            .entry(name.to_string())
            .or_insert_with(|| key.into());
    }

    /// Whether a signature-equal method is present
    pub fn contains(&self, function: &Function) -> bool {
        self.methods.get(&function.name) == Some(&function.signature_key())
    }

    /// Whether every method of `required` is present with the same signature
    pub fn satisfies(&self, required: &MethodSet) -> bool {
        required
            .methods
            .iter()
            .all(|(name, key)| self.methods.get(name) == Some(key))
    }

    /// Number of methods
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the set has no methods
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

type Visited<'a> = BTreeSet<(&'a str, &'a str)>;

/// Transitive required methods, or `None` when the interface cannot be
/// satisfied by a struct (type-set elements or unloaded embeds)
fn required_methods(relations: &Relations, interface: &Interface) -> Option<MethodSet> {
    let mut set = MethodSet::new();
    let mut visited = Visited::new();
    collect_required(relations, interface, &mut set, &mut visited).then_some(set)
}

fn collect_required<'a>(
    relations: &'a Relations,
    interface: &'a Interface,
    set: &mut MethodSet,
    visited: &mut Visited<'a>,
) -> bool {
    if interface.type_set {
        return false;
    }
    if !visited.insert((interface.package.path.as_str(), interface.name.as_str())) {
        return true;
    }

    for method in &interface.methods {
        set.insert(method);
    }

    for embedded in &interface.embedded {
        match embedded.package() {
            // any and comparable add nothing
            None => {
                if embedded.go_name() == "error" {
                    set.insert_key("Error", ERROR_SIGNATURE);
                }
            }
            Some(package) => match relations.find_interface(&package.path, embedded.go_name()) {
                Some(inner) => {
                    if !collect_required(relations, inner, set, visited) {
                        return false;
                    }
                }
                None => return false,
            },
        }
    }
    true
}

enum Promoted<'a> {
    Struct(&'a Struct),
    Interface(&'a Interface),
    Methods(&'a [Function]),
}

/// Full method set of a struct, including promoted methods
pub(crate) fn struct_method_set(relations: &Relations, target: &Struct) -> MethodSet {
    let mut set = MethodSet::new();
    let mut visited = Visited::new();
    let mut queue = VecDeque::from([Promoted::Struct(target)]);

    while let Some(next) = queue.pop_front() {
        match next {
            Promoted::Methods(methods) => methods.iter().for_each(|m| set.insert(m)),
            Promoted::Interface(interface) => {
                let mut seen = Visited::new();
                collect_required(relations, interface, &mut set, &mut seen);
            }
            Promoted::Struct(current) => {
                if !visited.insert((current.package.path.as_str(), current.name.as_str())) {
                    continue;
                }
                current.methods.iter().for_each(|m| set.insert(m));

                for field in current.embedded_fields() {
                    let embedded = field.composed_type();
                    let Some(package) = embedded.package() else {
                        if embedded.go_name() == "error" {
                            set.insert_key("Error", ERROR_SIGNATURE);
                        }
                        continue;
                    };
                    match relations.find(&package.path, embedded.go_name()) {
                        Some(EntityRef::Struct(s)) => queue.push_back(Promoted::Struct(s)),
                        Some(EntityRef::Interface(i)) => queue.push_back(Promoted::Interface(i)),
                        Some(EntityRef::DefinedType(d)) => {
                            queue.push_back(Promoted::Methods(&d.methods))
                        }
                        Some(EntityRef::TypeAlias(_)) | None => {}
                    }
                }
            }
        }
    }
    set
}

/// Whether `target` structurally implements `interface`
///
/// Interfaces without required methods are never implemented.
pub fn implements(relations: &Relations, target: &Struct, interface: &Interface) -> bool {
    match required_methods(relations, interface) {
        Some(required) if !required.is_empty() => {
            struct_method_set(relations, target).satisfies(&required)
        }
        _ => false,
    }
}

/// Compute implemented interfaces for every struct
///
/// Every (struct, interface) pair of the model is tested, across packages.
/// Structs are matched in parallel; the input is left untouched.
pub fn classify(relations: &Relations) -> Relations {
    let required: Vec<(InterfaceRef, MethodSet)> = relations
        .all_interfaces()
        .filter_map(|i| {
            required_methods(relations, i)
                .filter(|r| !r.is_empty())
                .map(|r| (i.reference(), r))
        })
        .collect();
    let structs: Vec<&Struct> = relations.all_structs().collect();

    let implemented: Vec<BTreeSet<InterfaceRef>> = structs
        .par_iter()
        .map(|s| {
            let methods = struct_method_set(relations, s);
            required
                .iter()
                .filter(|(_, r)| methods.satisfies(r))
                .map(|(i, _)| i.clone())
                .collect()
        })
        .collect();

    let mut classified = relations.clone();
    let mut edges = 0;
    for (s, interfaces) in structs.iter().zip(implemented) {
        edges += interfaces.len();
        if let Some(target) = classified
            .structs
            .get_mut(&s.package.path)
            .and_then(|m| m.get_mut(&s.name))
        {
            if !interfaces.is_empty() {
                debug!(
                    "{}.{} implements {} interfaces",
                    s.package.name,
                    s.name,
                    interfaces.len()
                );
            }
            target.implemented_interfaces = interfaces;
        }
    }

    info!(
        "Matched {} structs against {} interfaces: {} implementations",
        structs.len(),
        required.len(),
        edges
    );
    classified
}
