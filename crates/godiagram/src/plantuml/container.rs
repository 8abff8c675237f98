use super::{Element, LineStringBuilder};

/// Circled letter and color shown in a class header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    letter: char,
    color: String,
}

impl Spot {
    /// Create a spot
    pub fn new(letter: char, color: impl Into<String>) -> Self {
        Self {
            letter,
            color: color.into(),
        }
    }
}

fn write_block(
    out: &mut LineStringBuilder,
    depth: usize,
    header: &str,
    children: &[Box<dyn Element>],
) {
    out.write_line(depth, &format!("{header} {{"));
    for child in children {
        child.write(out, depth + 1);
    }
    out.write_line(depth, "}");
}

/// `namespace <name> { ... }`
#[derive(Default)]
pub struct Namespace {
    name: String,
    children: Vec<Box<dyn Element>>,
}

impl Namespace {
    /// Create an empty namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child
    pub fn with(mut self, child: impl Element + 'static) -> Self {
        self.push(child);
        self
    }

    /// Append a child
    pub fn push(&mut self, child: impl Element + 'static) {
        self.children.push(Box::new(child));
    }
}

impl Element for Namespace {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        write_block(out, depth, &format!("namespace {}", self.name), &self.children);
    }
}

/// `class "<name>" [as <alias>] [<< (L,#color) [stereotype] >>] { ... }`
#[derive(Default)]
pub struct Class {
    name: String,
    alias: Option<String>,
    spot: Option<Spot>,
    stereotype: Option<String>,
    children: Vec<Box<dyn Element>>,
}

impl Class {
    /// Create an empty class
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Refer to the class by a separate identifier
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the header spot
    pub fn with_spot(mut self, spot: Spot) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Set a stereotype label, shown after the spot
    pub fn with_stereotype(mut self, stereotype: impl Into<String>) -> Self {
        self.stereotype = Some(stereotype.into());
        self
    }

    /// Append a child
    pub fn with(mut self, child: impl Element + 'static) -> Self {
        self.push(child);
        self
    }

    /// Append a child
    pub fn push(&mut self, child: impl Element + 'static) {
        self.children.push(Box::new(child));
    }

    fn header(&self) -> String {
        let mut header = format!("class \"{}\"", self.name);
        if let Some(alias) = &self.alias {
            header.push_str(&format!(" as {alias}"));
        }

        let mut marks = Vec::new();
        if let Some(spot) = &self.spot {
            marks.push(format!("({},{})", spot.letter, spot.color));
        }
        if let Some(stereotype) = &self.stereotype {
            marks.push(stereotype.clone());
        }
        if !marks.is_empty() {
            header.push_str(&format!(" << {} >>", marks.join(" ")));
        }
        header
    }
}

impl Element for Class {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        write_block(out, depth, &self.header(), &self.children);
    }
}

/// `interface <name> { ... }`
#[derive(Default)]
pub struct Interface {
    name: String,
    children: Vec<Box<dyn Element>>,
}

impl Interface {
    /// Create an empty interface
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child
    pub fn with(mut self, child: impl Element + 'static) -> Self {
        self.push(child);
        self
    }

    /// Append a child
    pub fn push(&mut self, child: impl Element + 'static) {
        self.children.push(Box::new(child));
    }
}

impl Element for Interface {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        write_block(out, depth, &format!("interface {}", self.name), &self.children);
    }
}
