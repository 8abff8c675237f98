use super::{Element, LineStringBuilder};

/// Connector of a relation line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// `*--`
    Composition,
    /// `<|--`
    Implementation,
    /// `o--`
    Aggregation,
    /// `#..`
    Alias,
    /// `<--`
    Import,
}

impl RelationKind {
    /// PlantUML connector token
    pub fn connector(&self) -> &'static str {
        match self {
            RelationKind::Composition => "*--",
            RelationKind::Implementation => "<|--",
            RelationKind::Aggregation => "o--",
            RelationKind::Alias => "#..",
            RelationKind::Import => "<--",
        }
    }
}

/// `"<from>" <connector> "<to>" [: label]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    kind: RelationKind,
    from: String,
    to: String,
    label: Option<String>,
}

impl Relation {
    /// Create an unlabeled relation
    pub fn new(kind: RelationKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    /// Annotate the relation
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Line text without indentation
    pub fn text(&self) -> String {
        let mut text = format!(
            "\"{}\" {} \"{}\"",
            self.from,
            self.kind.connector(),
            self.to
        );
        if let Some(label) = &self.label {
            text.push_str(&format!(" : {label}"));
        }
        text
    }
}

impl Element for Relation {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        out.write_line(depth, &self.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectors() {
        let text = |kind| Relation::new(kind, "a.A", "b.B").text();
        assert_eq!(text(RelationKind::Composition), "\"a.A\" *-- \"b.B\"");
        assert_eq!(text(RelationKind::Implementation), "\"a.A\" <|-- \"b.B\"");
        assert_eq!(text(RelationKind::Aggregation), "\"a.A\" o-- \"b.B\"");
        assert_eq!(text(RelationKind::Alias), "\"a.A\" #.. \"b.B\"");
        assert_eq!(text(RelationKind::Import), "\"a.A\" <-- \"b.B\"");
    }

    #[test]
    fn test_label() {
        let relation =
            Relation::new(RelationKind::Aggregation, "item.Item", "shop.Box").with_label("uses");
        assert_eq!(relation.text(), "\"item.Item\" o-- \"shop.Box\" : uses");
    }
}
