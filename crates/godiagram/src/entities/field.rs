use crate::namer::Type;

/// Whether `name` is unexported (lowercase initial)
pub fn is_private(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

/// Struct field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name; embedded fields carry their type's name
    pub name: String,
    /// Field type
    pub ty: Type,
    /// Declared without an explicit name
    pub embedded: bool,
}

impl Field {
    /// Create a named field
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
        }
    }

    /// Mark the field as embedded
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Whether the field is unexported
    pub fn is_private(&self) -> bool {
        is_private(&self.name)
    }

    /// Type identity an embedded field composes, with any pointer stripped
    pub fn composed_type(&self) -> &Type {
        self.ty.terminal_types().first().unwrap_or(&self.ty)
    }
}
