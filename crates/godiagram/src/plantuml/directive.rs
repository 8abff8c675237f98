use super::{Element, LineStringBuilder};

/// Themes that get smaller attribute icons
const REDDRESS_THEMES: &[&str] = &[
    "reddress-darkblue",
    "reddress-darkgreen",
    "reddress-darkorange",
    "reddress-darkred",
    "reddress-lightblue",
    "reddress-lightgreen",
    "reddress-lightorange",
    "reddress-lightred",
];

/// `title <text>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    text: String,
}

impl Title {
    /// Create a title
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Element for Title {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        out.write_line(depth, &format!("title {}", self.text));
    }
}

/// `!theme <name>`, plus icon styling for the reddress themes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
}

impl Theme {
    /// Create a theme directive
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Element for Theme {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        out.write_line(depth, &format!("!theme {}", self.name));
        if REDDRESS_THEMES.contains(&self.name.as_str()) {
            out.write_line(depth, "skinparam class {");
            out.write_line(depth + 1, "attributeIconSize 8");
            out.write_line(depth, "}");
        }
    }
}

/// `legend` ... `end legend`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    lines: Vec<String>,
}

impl Legend {
    /// Create a legend from its lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether every line is blank
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

impl Element for Legend {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        out.write_line(depth, "legend");
        for line in &self.lines {
            out.write_line(depth + 1, line);
        }
        out.write_line(depth, "end legend");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: &dyn Element) -> String {
        let mut out = LineStringBuilder::new();
        element.write(&mut out, 0);
        out.into_string()
    }

    #[test]
    fn test_plain_theme() {
        assert_eq!(render(&Theme::new("vibrant")), "!theme vibrant\n");
    }

    #[test]
    fn test_reddress_theme() {
        assert_eq!(
            render(&Theme::new("reddress-darkblue")),
            "!theme reddress-darkblue\nskinparam class {\n    attributeIconSize 8\n}\n"
        );
    }

    #[test]
    fn test_legend() {
        let legend = Legend::new(["<b>Notes</b>", "first"]);
        assert!(!legend.is_blank());
        assert_eq!(
            render(&legend),
            "legend\n    <b>Notes</b>\n    first\nend legend\n"
        );
        assert!(Legend::new(["", "  "]).is_blank());
    }
}
