use super::{Element, LineStringBuilder};

fn visibility(name: &str) -> char {
    if crate::entities::is_private(name) {
        '-'
    } else {
        '+'
    }
}

/// `<+|-> <name> <type>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: String,
}

impl Field {
    /// Create a field line
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Element for Field {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        out.write_line(
            depth,
            &format!("{} {} {}", visibility(&self.name), self.name, self.ty),
        );
    }
}

/// `<+|-> <Name>(<p T>, ...) [R | (R1, R2)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    parameters: Vec<(String, String)>,
    results: Vec<String>,
}

impl Method {
    /// Create a method line without parameters or results
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Append a parameter; an empty name writes the type alone
    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push((name.into(), ty.into()));
        self
    }

    /// Append a result type
    pub fn with_result(mut self, ty: impl Into<String>) -> Self {
        self.results.push(ty.into());
        self
    }
}

impl Element for Method {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(|(name, ty)| {
                if name.is_empty() {
                    ty.clone()
                } else {
                    format!("{name} {ty}")
                }
            })
            .collect();

        let mut line = format!(
            "{} {}({})",
            visibility(&self.name),
            self.name,
            parameters.join(", ")
        );
        match self.results.as_slice() {
            [] => {}
            [single] => line.push_str(&format!(" {single}")),
            many => line.push_str(&format!(" ({})", many.join(", "))),
        }
        out.write_line(depth, &line);
    }
}

/// `' <text>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
}

impl Comment {
    /// Create a comment line
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Element for Comment {
    fn write(&self, out: &mut LineStringBuilder, depth: usize) {
        out.write_line(depth, &format!("' {}", self.text));
    }
}
