use crate::namer::Type;

/// Function parameter; `name` is empty for unnamed parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter type
    pub ty: Type,
}

impl Parameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Method of a struct, interface or defined type
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Method name
    pub name: String,
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// Result types in declaration order
    pub return_values: Vec<Type>,
}

impl Function {
    /// Create a method without parameters or results
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_values: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Append a result type
    pub fn with_return(mut self, ty: Type) -> Self {
        self.return_values.push(ty);
        self
    }

    /// Canonical key of the parameter and result types
    ///
    /// Parameter names are not part of the key.
    pub fn signature_key(&self) -> String {
        let params: Vec<&str> = self.parameters.iter().map(|p| p.ty.key()).collect();
        let results: Vec<&str> = self.return_values.iter().map(Type::key).collect();
        format!("({})({})", params.join(", "), results.join(", "))
    }

    /// Same name, same parameter types and same result types
    pub fn signature_eq(&self, other: &Function) -> bool {
        self.name == other.name
            && self.parameters.len() == other.parameters.len()
            && self.return_values.len() == other.return_values.len()
            && self
                .parameters
                .iter()
                .zip(&other.parameters)
                .all(|(a, b)| a.ty.key() == b.ty.key())
            && self
                .return_values
                .iter()
                .zip(&other.return_values)
                .all(|(a, b)| a.key() == b.key())
    }

    /// Whether the method is unexported
    pub fn is_private(&self) -> bool {
        super::is_private(&self.name)
    }
}
