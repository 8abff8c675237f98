//! Rendering options.
//!
//! Options can be built in code, deserialized with serde, or set one at a
//! time by key through [`RenderingOptions::set`], which is how configuration
//! files are applied. Keys are the snake_case field names.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Controls what the renderers emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderingOptions {
    /// Diagram title, omitted when empty
    pub title: String,
    /// Legend lines, omitted when all blank
    pub notes: Vec<String>,
    /// Theme name, omitted when empty
    pub theme: String,
    /// Render fields
    pub fields: bool,
    /// Render methods
    pub methods: bool,
    /// Render composition edges
    pub compositions: bool,
    /// Render implementation edges
    pub implementations: bool,
    /// Render aggregation edges
    pub aggregations: bool,
    /// Render alias edges
    pub aliases: bool,
    /// Label every edge with its role
    pub connection_labels: bool,
    /// Add aggregation edges for private fields
    pub aggregate_private_members: bool,
    /// Render lowercase-initial fields and methods
    pub private_members: bool,
}

impl Default for RenderingOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            notes: Vec::new(),
            theme: String::new(),
            fields: true,
            methods: true,
            compositions: true,
            implementations: true,
            aggregations: true,
            aliases: true,
            connection_labels: false,
            aggregate_private_members: false,
            private_members: true,
        }
    }
}

/// Value assigned to an option by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A toggle
    Bool(bool),
    /// A single line of text
    Text(String),
    /// Several lines of text
    List(Vec<String>),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl RenderingOptions {
    /// Every key accepted by [`RenderingOptions::set`]
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "notes",
        "theme",
        "fields",
        "methods",
        "compositions",
        "implementations",
        "aggregations",
        "aliases",
        "connection_labels",
        "aggregate_private_members",
        "private_members",
    ];

    /// Set a diagram title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a theme
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set legend lines
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes = notes.into_iter().map(Into::into).collect();
        self
    }

    /// Turn every relation category on or off
    pub fn with_connections(mut self, show: bool) -> Self {
        self.compositions = show;
        self.implementations = show;
        self.aggregations = show;
        self.aliases = show;
        self
    }

    /// Assign one option by key
    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) -> Result<(), ConfigError> {
        let value = value.into();
        match key {
            "title" => self.title = text(key, value)?,
            "theme" => self.theme = text(key, value)?,
            "notes" => {
                self.notes = match value {
                    OptionValue::List(lines) => lines,
                    OptionValue::Text(text) => text.lines().map(str::to_string).collect(),
                    OptionValue::Bool(_) => return Err(invalid(key, "text or list")),
                }
            }
            _ => {
                let toggle = self.toggle_mut(key)?;
                *toggle = boolean(key, value)?;
            }
        }
        Ok(())
    }

    /// Whether any relation category is enabled
    pub fn any_connections(&self) -> bool {
        self.compositions || self.implementations || self.aggregations || self.aliases
    }

    fn toggle_mut(&mut self, key: &str) -> Result<&mut bool, ConfigError> {
        let toggle = match key {
            "fields" => &mut self.fields,
            "methods" => &mut self.methods,
            "compositions" => &mut self.compositions,
            "implementations" => &mut self.implementations,
            "aggregations" => &mut self.aggregations,
            "aliases" => &mut self.aliases,
            "connection_labels" => &mut self.connection_labels,
            "aggregate_private_members" => &mut self.aggregate_private_members,
            "private_members" => &mut self.private_members,
            _ => {
                return Err(ConfigError::UnknownOption {
                    key: key.to_string(),
                })
            }
        };
        Ok(toggle)
    }
}

fn invalid(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn text(key: &str, value: OptionValue) -> Result<String, ConfigError> {
    match value {
        OptionValue::Text(text) => Ok(text),
        _ => Err(invalid(key, "text")),
    }
}

fn boolean(key: &str, value: OptionValue) -> Result<bool, ConfigError> {
    match value {
        OptionValue::Bool(flag) => Ok(flag),
        _ => Err(invalid(key, "boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderingOptions::default();
        assert!(options.fields && options.methods && options.private_members);
        assert!(options.any_connections());
        assert!(!options.connection_labels);
        assert!(!options.aggregate_private_members);
        assert!(options.title.is_empty());
    }

    #[test]
    fn test_set_by_key() {
        let mut options = RenderingOptions::default();
        options.set("title", "Shop").unwrap();
        options.set("fields", false).unwrap();
        options.set("notes", "first\nsecond").unwrap();

        assert_eq!(options.title, "Shop");
        assert!(!options.fields);
        assert_eq!(options.notes, vec!["first", "second"]);
    }

    #[test]
    fn test_every_key_is_settable() {
        let mut options = RenderingOptions::default();
        for key in RenderingOptions::KEYS {
            let value = match *key {
                "title" | "theme" | "notes" => OptionValue::from("x"),
                _ => OptionValue::from(true),
            };
            assert!(options.set(key, value).is_ok(), "key {key} rejected");
        }
    }

    #[test]
    fn test_unknown_key() {
        let mut options = RenderingOptions::default();
        let err = options.set("colors", true).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownOption {
                key: "colors".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_value_kind() {
        let mut options = RenderingOptions::default();
        assert!(matches!(
            options.set("methods", "yes"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            options.set("theme", false),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_with_connections() {
        let options = RenderingOptions::default().with_connections(false);
        assert!(!options.any_connections());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: RenderingOptions =
            serde_json::from_str(r#"{"title": "T", "aliases": false}"#).unwrap();
        assert_eq!(options.title, "T");
        assert!(!options.aliases);
        assert!(options.fields);

        assert!(serde_json::from_str::<RenderingOptions>(r#"{"colour": 1}"#).is_err());
    }
}
