//! Unresolved declarations of a single Go source file.
//!
//! The visitor lowers the tree-sitter tree into these types; the resolver
//! later binds every identifier to a package.

use std::path::PathBuf;

/// Type expression as written in source
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// Unqualified identifier (`Item`, `int`, `T`)
    Name(String),
    /// `pkg.Name`
    Qualified { package: String, name: String },
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Array(Box<TypeExpr>),
    Map(Box<TypeExpr>, Box<TypeExpr>),
    Chan(Box<TypeExpr>),
    Func(FuncExpr),
    Struct(Vec<FieldExpr>),
    Interface {
        methods: Vec<MethodSpec>,
        embeddeds: Vec<TypeExpr>,
    },
    /// `A | B` inside an interface
    Union(Vec<TypeExpr>),
    /// `~T` inside an interface
    Approx(Box<TypeExpr>),
    /// Anything the visitor does not understand
    Unknown,
}

impl TypeExpr {
    pub(crate) fn boxed(self) -> Box<TypeExpr> {
        Box::new(self)
    }
}

/// Parameter or result; unnamed entries have an empty name
#[derive(Debug, Clone, PartialEq)]
pub struct ParamExpr {
    pub name: String,
    pub ty: TypeExpr,
}

/// Parameters and results of a function type or declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuncExpr {
    pub params: Vec<ParamExpr>,
    pub results: Vec<ParamExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpr {
    pub name: String,
    pub ty: TypeExpr,
    pub embedded: bool,
}

/// Method listed in an interface body
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    pub func: FuncExpr,
}

/// `type Name[...] T` or `type Name = T`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
    pub type_params: Vec<String>,
    pub alias: bool,
    pub ty: TypeExpr,
}

/// `func (r *Recv[T]) Name(...) ...`
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub receiver: String,
    pub pointer_receiver: bool,
    /// Type parameter names bound by the receiver
    pub type_params: Vec<String>,
    pub name: String,
    pub func: FuncExpr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub path: String,
    /// Explicit local name, including `_` and `.`
    pub alias: Option<String>,
}

/// Everything the loader needs from one file
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub package: String,
    pub imports: Vec<ImportSpec>,
    pub types: Vec<TypeSpec>,
    pub methods: Vec<MethodDeclaration>,
}

impl ParsedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            package: String::new(),
            imports: Vec::new(),
            types: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// Files of one directory sharing a package clause
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPackage {
    pub dir: PathBuf,
    pub name: String,
    /// Import path
    pub path: String,
    pub files: Vec<ParsedFile>,
}

impl ParsedPackage {
    /// Type declarations across all files, paired with their file
    pub fn types(&self) -> impl Iterator<Item = (&ParsedFile, &TypeSpec)> {
        self.files
            .iter()
            .flat_map(|file| file.types.iter().map(move |spec| (file, spec)))
    }

    /// Method declarations across all files, paired with their file
    pub fn methods(&self) -> impl Iterator<Item = (&ParsedFile, &MethodDeclaration)> {
        self.files
            .iter()
            .flat_map(|file| file.methods.iter().map(move |method| (file, method)))
    }
}
