use super::write_header;
use crate::config::RenderingOptions;
use crate::package_graph::PackageGraph;
use crate::plantuml::{Document, Namespace, Relation, RelationKind};

/// Renders a [`PackageGraph`] as nested namespaces and import arrows
pub struct PackageRenderer<'a> {
    graph: &'a PackageGraph,
    options: &'a RenderingOptions,
}

impl<'a> PackageRenderer<'a> {
    /// Prepare a renderer
    pub fn new(graph: &'a PackageGraph, options: &'a RenderingOptions) -> Self {
        Self { graph, options }
    }

    /// Build the element tree
    pub fn document(&self) -> Document {
        let mut document = Document::new();
        write_header(&mut document, self.options);

        for path in self.graph.packages() {
            if let Some(chain) = namespace_chain(path) {
                document.push(chain);
            }
            document.extend(self.graph.imports_of(path).filter_map(namespace_chain));
        }

        for (importer, imported) in self.graph.edges() {
            document.push(Relation::new(
                RelationKind::Import,
                dotted(imported),
                dotted(importer),
            ));
        }
        document
    }

    /// Serialize the diagram
    pub fn render(&self) -> String {
        self.document().render()
    }
}

/// Path segments with dots removed
fn segments(path: &str) -> Vec<String> {
    path.split('/')
        .map(|s| s.replace('.', ""))
        .filter(|s| !s.is_empty())
        .collect()
}

fn dotted(path: &str) -> String {
    segments(path).join(".")
}

/// One namespace per path segment, nested
fn namespace_chain(path: &str) -> Option<Namespace> {
    segments(path)
        .into_iter()
        .rev()
        .fold(None, |inner, segment| {
            let namespace = Namespace::new(segment);
            Some(match inner {
                Some(inner) => namespace.with(inner),
                None => namespace,
            })
        })
}
