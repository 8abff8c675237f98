//! Field and method lines shared by class and interface blocks.

use crate::config::RenderingOptions;
use crate::entities::{Field, Function};
use crate::plantuml;

/// Field lines sorted by name; empty when fields are hidden
pub(super) fn fields(fields: &[Field], options: &RenderingOptions) -> Vec<plantuml::Field> {
    if !options.fields {
        return Vec::new();
    }
    let mut visible: Vec<&Field> = fields
        .iter()
        .filter(|f| options.private_members || !f.is_private())
        .collect();
    visible.sort_by(|a, b| a.name.cmp(&b.name));
    visible
        .into_iter()
        .map(|f| plantuml::Field::new(f.name.clone(), f.ty.qualified_name()))
        .collect()
}

/// Method lines sorted by name; empty when methods are hidden
pub(super) fn methods(methods: &[Function], options: &RenderingOptions) -> Vec<plantuml::Method> {
    if !options.methods {
        return Vec::new();
    }
    let mut visible: Vec<&Function> = methods
        .iter()
        .filter(|m| options.private_members || !m.is_private())
        .collect();
    visible.sort_by(|a, b| a.name.cmp(&b.name));
    visible.into_iter().map(method).collect()
}

fn method(function: &Function) -> plantuml::Method {
    let mut method = plantuml::Method::new(function.name.clone());
    for parameter in &function.parameters {
        method = method.with_parameter(parameter.name.clone(), parameter.ty.qualified_name());
    }
    for result in &function.return_values {
        method = method.with_result(result.qualified_name());
    }
    method
}
