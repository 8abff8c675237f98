//! Entity extraction: one semantic package in, normalized entities out.

use crate::entities::{
    DefinedType, Entity, Field, Function, Interface, PackageSummary, Parameter, Struct, TypeAlias,
};
use crate::namer::{is_builtin, TypeNamer};
use godiagram_api::{
    GoType, InterfaceMethod, MethodDecl, SemanticPackage, Signature, StructField, TypeObject,
};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Universe interfaces that may be embedded in interface bodies
const EMBEDDABLE_BUILTINS: &[&str] = &["any", "comparable", "error"];

/// Entities and imports of one package
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPackage {
    /// Package identity
    pub summary: PackageSummary,
    /// Imported packages, loaded or not
    pub imports: Vec<PackageSummary>,
    /// Declared types, sorted by name
    pub entities: Vec<Entity>,
}

/// Extract the entities of one package
pub fn extract_package(package: &SemanticPackage) -> ExtractedPackage {
    let summary = PackageSummary::new(package.name.clone(), package.path.clone());
    let namer = TypeNamer::new(&summary);

    let mut entities: BTreeMap<String, Entity> = BTreeMap::new();
    for object in &package.objects {
        let entity = classify_object(object, &summary, &namer);
        if entities.insert(object.name.clone(), entity).is_some() {
            warn!(
                "Type {} declared twice in {}, keeping the last declaration",
                object.name, summary.path
            );
        }
    }

    for method in &package.methods {
        attach_method(&mut entities, method, &summary, &namer);
    }

    let imports = package
        .imports
        .iter()
        .map(|i| PackageSummary::new(i.name.clone(), i.path.clone()))
        .collect();

    debug!(
        "Extracted {} types from package {}",
        entities.len(),
        summary.path
    );

    ExtractedPackage {
        summary,
        imports,
        entities: entities.into_values().collect(),
    }
}

fn classify_object(object: &TypeObject, package: &PackageSummary, namer: &TypeNamer) -> Entity {
    match &object.underlying {
        GoType::Struct { fields } => {
            let mut entity = Struct::new(object.name.clone(), package.clone());
            entity.fields = fields.iter().map(|f| extract_field(f, namer)).collect();
            Entity::Struct(entity)
        }
        GoType::Interface { methods, embeddeds } => {
            Entity::Interface(extract_interface(object, methods, embeddeds, package, namer))
        }
        underlying if !object.alias => Entity::DefinedType(DefinedType::new(
            object.name.clone(),
            package.clone(),
            namer.name(underlying),
        )),
        underlying => Entity::TypeAlias(TypeAlias::new(
            object.name.clone(),
            package.clone(),
            namer.name(underlying),
        )),
    }
}

fn extract_field(field: &StructField, namer: &TypeNamer) -> Field {
    let extracted = Field::new(field.name.clone(), namer.name(&field.ty));
    if field.embedded {
        extracted.embedded()
    } else {
        extracted
    }
}

fn extract_interface(
    object: &TypeObject,
    methods: &[InterfaceMethod],
    embeddeds: &[GoType],
    package: &PackageSummary,
    namer: &TypeNamer,
) -> Interface {
    let mut interface = Interface::new(object.name.clone(), package.clone());
    interface.methods = methods
        .iter()
        .map(|m| extract_function(&m.name, &m.signature, namer))
        .collect();

    for element in embeddeds {
        match element {
            GoType::Named { .. } => interface.embedded.push(namer.name(element)),
            GoType::Basic { name } if is_embeddable_builtin(name) => {
                interface.embedded.push(namer.name(element))
            }
            _ => interface.type_set = true,
        }
    }
    interface
}

fn extract_function(name: &str, signature: &Signature, namer: &TypeNamer) -> Function {
    Function {
        name: name.to_string(),
        parameters: signature
            .params
            .iter()
            .map(|p| Parameter::new(p.name.clone(), namer.name(&p.ty)))
            .collect(),
        return_values: signature.results.iter().map(|r| namer.name(&r.ty)).collect(),
    }
}

fn attach_method(
    entities: &mut BTreeMap<String, Entity>,
    method: &MethodDecl,
    package: &PackageSummary,
    namer: &TypeNamer,
) {
    let function = extract_function(&method.name, &method.signature, namer);
    let entity = entities.entry(method.receiver.clone()).or_insert_with(|| {
        debug!(
            "Creating struct {} for method {} in {}",
            method.receiver, method.name, package.path
        );
        Entity::Struct(Struct::new(method.receiver.clone(), package.clone()))
    });

    match entity {
        Entity::Struct(s) => s.methods.push(function),
        Entity::DefinedType(d) => d.methods.push(function),
        Entity::Interface(_) | Entity::TypeAlias(_) => warn!(
            "Skipping method {} on {}.{}: receiver is not a struct or defined type",
            method.name, package.name, method.receiver
        ),
    }
}

/// Whether an interface element names an embeddable universe interface
pub(crate) fn is_embeddable_builtin(name: &str) -> bool {
    is_builtin(name) && EMBEDDABLE_BUILTINS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use godiagram_api::{Import, PackageRef, Param};

    fn shop() -> SemanticPackage {
        let io_writer = GoType::named("Writer", PackageRef::new("io", "io"));
        let item = GoType::named("Item", PackageRef::new("item", "example.com/shop/item"));

        SemanticPackage::new("shop", "example.com/shop")
            .with_import(Import::new("io", "io"))
            .with_import(Import::new("example.com/shop/item", "item"))
            .with_object(TypeObject::defined(
                "Box",
                GoType::Struct {
                    fields: vec![
                        StructField::embedded("Writer", io_writer),
                        StructField::new("items", GoType::slice(item.clone())),
                    ],
                },
            ))
            .with_object(TypeObject::defined(
                "Sizer",
                GoType::Interface {
                    methods: vec![InterfaceMethod::new(
                        "Size",
                        Signature::new(vec![], vec![Param::unnamed(GoType::basic("int"))]),
                    )],
                    embeddeds: vec![GoType::basic("error")],
                },
            ))
            .with_object(TypeObject::defined("Celsius", GoType::basic("float64")))
            .with_object(TypeObject::alias("Label", GoType::basic("string")))
            .with_method(MethodDecl::new(
                "Box",
                "Add",
                Signature::new(vec![Param::new("i", item)], vec![]),
            ))
            .with_method(MethodDecl::new(
                "Celsius",
                "String",
                Signature::new(vec![], vec![Param::unnamed(GoType::basic("string"))]),
            ))
    }

    #[test]
    fn test_classification() {
        let extracted = extract_package(&shop());

        let kinds: Vec<(&str, &str)> = extracted
            .entities
            .iter()
            .map(|e| {
                let kind = match e {
                    Entity::Struct(_) => "struct",
                    Entity::Interface(_) => "interface",
                    Entity::DefinedType(_) => "defined",
                    Entity::TypeAlias(_) => "alias",
                };
                (e.name(), kind)
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                ("Box", "struct"),
                ("Celsius", "defined"),
                ("Label", "alias"),
                ("Sizer", "interface"),
            ]
        );
        assert_eq!(extracted.imports.len(), 2);
        assert_eq!(extracted.imports[1].name, "item");
    }

    #[test]
    fn test_struct_fields_and_methods() {
        let extracted = extract_package(&shop());
        let Entity::Struct(b) = &extracted.entities[0] else {
            panic!("expected struct");
        };

        assert_eq!(b.fields.len(), 2);
        assert!(b.fields[0].embedded);
        assert_eq!(b.fields[0].composed_type().qualified_name(), "io.Writer");
        assert_eq!(b.fields[1].ty.qualified_name(), "[]item.Item");
        assert_eq!(b.methods.len(), 1);
        assert_eq!(b.methods[0].parameters[0].name, "i");
    }

    #[test]
    fn test_defined_type_methods() {
        let extracted = extract_package(&shop());
        let Entity::DefinedType(c) = &extracted.entities[1] else {
            panic!("expected defined type");
        };
        assert!(c.underlying.is_builtin());
        assert_eq!(c.methods[0].name, "String");
    }

    #[test]
    fn test_interface_embeds_kept_apart() {
        let extracted = extract_package(&shop());
        let Entity::Interface(sizer) = &extracted.entities[3] else {
            panic!("expected interface");
        };
        assert_eq!(sizer.methods.len(), 1);
        assert_eq!(sizer.embedded.len(), 1);
        assert_eq!(sizer.embedded[0].go_name(), "error");
        assert!(!sizer.type_set);
    }

    #[test]
    fn test_type_set_elements() {
        let pkg = SemanticPackage::new("num", "example.com/num").with_object(TypeObject::defined(
            "Number",
            GoType::Interface {
                methods: vec![],
                embeddeds: vec![GoType::Tuple {
                    elems: vec![GoType::basic("int"), GoType::basic("float64")],
                }],
            },
        ));
        let extracted = extract_package(&pkg);
        let Entity::Interface(number) = &extracted.entities[0] else {
            panic!("expected interface");
        };
        assert!(number.type_set);
        assert!(number.embedded.is_empty());
    }

    #[test]
    fn test_method_creates_struct_on_demand() {
        let pkg = SemanticPackage::new("lazy", "example.com/lazy").with_method(MethodDecl::new(
            "Worker",
            "Run",
            Signature::default(),
        ));
        let extracted = extract_package(&pkg);
        match &extracted.entities[..] {
            [Entity::Struct(worker)] => {
                assert_eq!(worker.name, "Worker");
                assert_eq!(worker.methods.len(), 1);
            }
            other => panic!("unexpected entities {other:?}"),
        }
    }

    #[test]
    fn test_method_on_alias_is_skipped() {
        let pkg = SemanticPackage::new("a", "example.com/a")
            .with_object(TypeObject::alias("Name", GoType::basic("string")))
            .with_method(MethodDecl::new("Name", "Len", Signature::default()));
        let extracted = extract_package(&pkg);
        assert!(matches!(&extracted.entities[..], [Entity::TypeAlias(_)]));
    }

    #[test]
    fn test_alias_of_struct_is_a_struct() {
        let pkg = SemanticPackage::new("a", "example.com/a").with_object(TypeObject::alias(
            "Point",
            GoType::Struct {
                fields: vec![StructField::new("X", GoType::basic("int"))],
            },
        ));
        let extracted = extract_package(&pkg);
        assert!(matches!(&extracted.entities[..], [Entity::Struct(_)]));
    }

    #[test]
    fn test_embeddable_builtins() {
        assert!(is_embeddable_builtin("error"));
        assert!(!is_embeddable_builtin("int"));
        assert!(!is_embeddable_builtin("Writer"));
    }
}
