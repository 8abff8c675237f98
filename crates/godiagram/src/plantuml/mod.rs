//! Composable PlantUML element tree.
//!
//! Every element writes itself at a nesting depth; containers write their
//! children one level deeper and close at their own depth. A [`Document`]
//! brackets its top-level elements with `@startuml` and `@enduml`.

mod container;
mod directive;
mod member;
mod relation;

pub use container::{Class, Interface, Namespace, Spot};
pub use directive::{Legend, Theme, Title};
pub use member::{Comment, Field, Method};
pub use relation::{Relation, RelationKind};

/// One indent level
pub const INDENT: &str = "    ";

/// Line-oriented text sink
#[derive(Debug, Default)]
pub struct LineStringBuilder {
    buffer: String,
}

impl LineStringBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` indented by `depth` levels
    pub fn write_line(&mut self, depth: usize, line: &str) {
        for _ in 0..depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Finished text
    pub fn into_string(self) -> String {
        self.buffer
    }
}

/// A node of the diagram document
pub trait Element {
    /// Write this element at `depth`
    fn write(&self, out: &mut LineStringBuilder, depth: usize);
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        (**self).write(out, depth)
    }
}

/// Top-level diagram document
#[derive(Default)]
pub struct Document {
    elements: Vec<Box<dyn Element>>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level element
    pub fn push(&mut self, element: impl Element + 'static) {
        self.elements.push(Box::new(element));
    }

    /// Append every element of `elements`
    pub fn extend<E, I>(&mut self, elements: I)
    where
        E: Element + 'static,
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.push(element);
        }
    }

    /// Number of top-level elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize the document
    pub fn render(&self) -> String {
        let mut out = LineStringBuilder::new();
        out.write_line(0, "@startuml");
        for element in &self.elements {
            element.write(&mut out, 0);
        }
        out.write_line(0, "@enduml");
        out.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        assert_eq!(Document::new().render(), "@startuml\n@enduml\n");
    }

    #[test]
    fn test_indentation() {
        let mut out = LineStringBuilder::new();
        out.write_line(0, "a");
        out.write_line(2, "b");
        assert_eq!(out.into_string(), "a\n        b\n");
    }

    #[test]
    fn test_nested_document() {
        let mut document = Document::new();
        document.push(Title::new("Shop"));
        document.push(
            Namespace::new("shop").with(
                Class::new("Box")
                    .with_spot(Spot::new('S', "#7FFFD4"))
                    .with(Field::new("Items", "[]item.Item"))
                    .with(Method::new("Add").with_parameter("i", "item.Item")),
            ),
        );
        document.push(Relation::new(
            RelationKind::Aggregation,
            "item.Item",
            "shop.Box",
        ));

        let expected = "\
@startuml
title Shop
namespace shop {
    class \"Box\" << (S,#7FFFD4) >> {
        + Items []item.Item
        + Add(i item.Item)
    }
}
\"item.Item\" o-- \"shop.Box\"
@enduml
";
        assert_eq!(document.render(), expected);
    }
}
