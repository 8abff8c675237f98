//! Renderers walking the relation model into PlantUML element trees.
//!
//! Every enumeration is sorted, so a fixed model and fixed options always
//! produce byte-identical output.

mod alias;
mod class;
mod members;
mod package;

pub use class::ClassRenderer;
pub use package::PackageRenderer;

use crate::classify::{Edge, EdgeKind};
use crate::config::RenderingOptions;
use crate::plantuml::{Document, Legend, Relation, RelationKind, Theme, Title};

/// Theme, title and legend, each only when configured
fn write_header(document: &mut Document, options: &RenderingOptions) {
    if !options.theme.trim().is_empty() {
        document.push(Theme::new(options.theme.trim()));
    }
    if !options.title.trim().is_empty() {
        document.push(Title::new(options.title.trim()));
    }
    let legend = Legend::new(options.notes.iter().cloned());
    if !legend.is_blank() {
        document.push(legend);
    }
}

/// Relation element for an edge
fn relation(edge: &Edge, options: &RenderingOptions) -> Relation {
    let kind = match edge.kind {
        EdgeKind::Composition => RelationKind::Composition,
        EdgeKind::Implementation => RelationKind::Implementation,
        EdgeKind::Aggregation => RelationKind::Aggregation,
        EdgeKind::Alias => RelationKind::Alias,
    };
    let relation = Relation::new(kind, edge.from.to_string(), edge.to.to_string());
    if options.connection_labels {
        relation.with_label(edge.kind.label())
    } else {
        relation
    }
}

/// Relations sorted by their text, duplicates removed
fn sorted_relations<'a>(
    edges: impl IntoIterator<Item = &'a Edge>,
    options: &RenderingOptions,
) -> Vec<Relation> {
    let mut relations: Vec<(String, Relation)> = edges
        .into_iter()
        .map(|edge| {
            let relation = relation(edge, options);
            (relation.text(), relation)
        })
        .collect();
    relations.sort_by(|a, b| a.0.cmp(&b.0));
    relations.dedup_by(|a, b| a.0 == b.0);
    relations.into_iter().map(|(_, relation)| relation).collect()
}
