use super::alias::{alias_namespaces, synthetic_leaves};
use super::members::{fields, methods};
use super::{sorted_relations, write_header};
use crate::classify::{alias_edges, interface_edges, struct_edges, Edge};
use crate::config::RenderingOptions;
use crate::entities::{DefinedType, Interface, PackageSummary, Struct};
use crate::model::Relations;
use crate::names::NameTable;
use crate::plantuml::{self, Class, Document, Namespace, Spot};
use log::debug;

const STRUCT_SPOT: (char, &str) = ('S', "#7FFFD4");
const DEFINED_SPOT: (char, &str) = ('D', "#FF7700");

/// Renders a classified [`Relations`] model as a class diagram
///
/// Per package, in package order: one namespace holding structs, then
/// interfaces, then defined types, followed by that package's composition,
/// implementation and aggregation edges. Alias classes, alias edges and
/// synthetic leaves come last.
pub struct ClassRenderer<'a> {
    relations: &'a Relations,
    options: &'a RenderingOptions,
    names: NameTable,
}

impl<'a> ClassRenderer<'a> {
    /// Prepare a renderer; builds the identifier table for composite types
    pub fn new(relations: &'a Relations, options: &'a RenderingOptions) -> Self {
        Self {
            relations,
            options,
            names: NameTable::from_relations(relations),
        }
    }

    /// Build the element tree
    pub fn document(&self) -> Document {
        let mut document = Document::new();
        write_header(&mut document, self.options);

        for package in self.relations.packages() {
            document.push(self.namespace(package));
            document.extend(self.package_relations(package));
        }

        document.extend(alias_namespaces(self.relations));
        if self.options.aliases {
            let edges = alias_edges(self.relations, &self.names);
            document.extend(edges.iter().map(|e| super::relation(e, self.options)));
        }
        document.extend(synthetic_leaves(&self.names, self.options));

        debug!("Class diagram has {} top-level elements", document.len());
        document
    }

    /// Serialize the diagram
    pub fn render(&self) -> String {
        self.document().render()
    }

    fn namespace(&self, package: &PackageSummary) -> Namespace {
        let mut namespace = Namespace::new(package.name.clone());
        for s in self.relations.structs(&package.path) {
            namespace.push(self.struct_class(s));
        }
        for i in self.relations.interfaces(&package.path) {
            namespace.push(self.interface(i));
        }
        for d in self.relations.defined_types(&package.path) {
            namespace.push(self.defined_type(d));
        }
        namespace
    }

    fn struct_class(&self, s: &Struct) -> Class {
        let mut class = Class::new(s.name.clone()).with_spot(Spot::new(STRUCT_SPOT.0, STRUCT_SPOT.1));
        for field in fields(&s.fields, self.options) {
            class.push(field);
        }
        for method in methods(&s.methods, self.options) {
            class.push(method);
        }
        class
    }

    fn interface(&self, i: &Interface) -> plantuml::Interface {
        let mut interface = plantuml::Interface::new(i.name.clone());
        for method in methods(&i.methods, self.options) {
            interface.push(method);
        }
        interface
    }

    fn defined_type(&self, d: &DefinedType) -> Class {
        let mut class = Class::new(d.name.clone()).with_spot(Spot::new(DEFINED_SPOT.0, DEFINED_SPOT.1));
        if d.underlying.is_builtin() {
            class = class.with_stereotype(format!("type of __{}__", d.underlying.go_name()));
        }
        for method in methods(&d.methods, self.options) {
            class.push(method);
        }
        class
    }

    /// Composition, implementation and aggregation lines of one package
    fn package_relations(&self, package: &PackageSummary) -> Vec<plantuml::Relation> {
        let options = self.options;
        let mut compositions: Vec<Edge> = Vec::new();
        let mut implementations: Vec<Edge> = Vec::new();
        let mut aggregations: Vec<Edge> = Vec::new();

        for s in self.relations.structs(&package.path) {
            let edges = struct_edges(s);
            compositions.extend(edges.compositions);
            implementations.extend(edges.implementations);
            aggregations.extend(edges.aggregations);
            if options.aggregate_private_members {
                aggregations.extend(edges.private_aggregations);
            }
        }
        for i in self.relations.interfaces(&package.path) {
            compositions.extend(interface_edges(i));
        }

        let mut lines = Vec::new();
        if options.compositions {
            lines.extend(sorted_relations(&compositions, options));
        }
        if options.implementations {
            lines.extend(sorted_relations(&implementations, options));
        }
        if options.aggregations {
            lines.extend(sorted_relations(&aggregations, options));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use godiagram_api::{
        GoType, InterfaceMethod, MethodDecl, PackageRef, Param, SemanticPackage, Signature,
        StructField, TypeObject,
    };

    fn shop() -> Relations {
        let item = GoType::named("Item", PackageRef::new("item", "example.com/shop/item"));
        let packages = vec![
            SemanticPackage::new("shop", "example.com/shop")
                .with_object(TypeObject::defined(
                    "Box",
                    GoType::Struct {
                        fields: vec![
                            StructField::new("items", GoType::slice(item.clone())),
                            StructField::new("Label", GoType::basic("string")),
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
                        embeddeds: vec![],
                    },
                ))
                .with_object(TypeObject::defined("Weight", GoType::basic("int")))
                .with_method(MethodDecl::new(
                    "Box",
                    "Size",
                    Signature::new(vec![], vec![Param::unnamed(GoType::basic("int"))]),
                ))
                .with_method(MethodDecl::new("Box", "reset", Signature::default())),
            SemanticPackage::new("item", "example.com/shop/item")
                .with_object(TypeObject::defined("Item", GoType::Struct { fields: vec![] })),
        ];
        classify(&Relations::from_packages(&packages))
    }

    #[test]
    fn test_default_render() {
        let relations = shop();
        let options = RenderingOptions::default();
        let output = ClassRenderer::new(&relations, &options).render();

        let expected = "\
@startuml
namespace item {
    class \"Item\" << (S,#7FFFD4) >> {
    }
}
namespace shop {
    class \"Box\" << (S,#7FFFD4) >> {
        + Label string
        - items []item.Item
        + Size() int
        - reset()
    }
    interface Sizer {
        + Size() int
    }
    class \"Weight\" << (D,#FF7700) type of __int__ >> {
    }
}
\"shop.Sizer\" <|-- \"shop.Box\"
@enduml
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_private_aggregation_toggle() {
        let relations = shop();
        let options = RenderingOptions {
            aggregate_private_members: true,
            ..Default::default()
        };
        let output = ClassRenderer::new(&relations, &options).render();
        assert!(output.contains("\"item.Item\" o-- \"shop.Box\"\n"));
    }

    #[test]
    fn test_hidden_categories() {
        let relations = shop();
        let options = RenderingOptions {
            fields: false,
            methods: false,
            ..RenderingOptions::default().with_connections(false)
        };
        let output = ClassRenderer::new(&relations, &options).render();

        assert!(!output.contains("Label"));
        assert!(!output.contains("Size()"));
        assert!(!output.contains("<|--"));
        assert!(output.contains("interface Sizer {\n    }"));
    }

    #[test]
    fn test_hidden_private_members() {
        let relations = shop();
        let options = RenderingOptions {
            private_members: false,
            ..Default::default()
        };
        let output = ClassRenderer::new(&relations, &options).render();

        assert!(output.contains("+ Label string"));
        assert!(!output.contains("items"));
        assert!(!output.contains("reset"));
    }
}
