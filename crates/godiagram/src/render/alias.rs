//! Alias classes and synthetic leaves.

use crate::config::RenderingOptions;
use crate::entities::TypeAlias;
use crate::model::Relations;
use crate::names::NameTable;
use crate::plantuml::{Class, Comment, Namespace, Spot};

/// Spot of type alias classes
const ALIAS_SPOT: (char, &str) = ('T', "#EDDC44");
const LEAF_COLOR: &str = "#3CB371";

/// One namespace block per type alias, sorted by name, package name and target
pub(super) fn alias_namespaces(relations: &Relations) -> Vec<Namespace> {
    let mut aliases: Vec<&TypeAlias> = relations.all_type_aliases().collect();
    aliases.sort_by(|a, b| {
        (&a.name, &a.package.name, a.underlying.go_name()).cmp(&(
            &b.name,
            &b.package.name,
            b.underlying.go_name(),
        ))
    });

    aliases
        .into_iter()
        .map(|alias| {
            let mut class = Class::new(alias.name.clone()).with_spot(Spot::new(ALIAS_SPOT.0, ALIAS_SPOT.1));
            if alias.underlying.is_builtin() {
                class = class.with_stereotype(format!("alias of __{}__", alias.underlying.go_name()));
            }
            Namespace::new(alias.package.name.clone()).with(class)
        })
        .collect()
}

/// Classes standing in for composite underlying types, each inside the
/// namespace of the package that owns its identifier
pub(super) fn synthetic_leaves(names: &NameTable, options: &RenderingOptions) -> Vec<Namespace> {
    if !options.aliases {
        return Vec::new();
    }
    names
        .entries()
        .map(|entry| {
            let original = entry.original.as_str();
            let leaf = Class::new(original)
                .with_alias(entry.identifier.clone())
                .with_spot(Spot::new(leaf_letter(original), LEAF_COLOR))
                .with(Comment::new(original));
            Namespace::new(entry.package.name.clone()).with(leaf)
        })
        .collect()
}

fn leaf_letter(original: &str) -> char {
    if original.starts_with("[]") {
        's'
    } else if original.starts_with("map[") {
        'm'
    } else if original.starts_with("func(") {
        'f'
    } else {
        '-'
    }
}
