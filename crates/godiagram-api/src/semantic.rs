//! Resolved semantic model of Go packages.
//!
//! These types are the input contract of the relation model builder. A front end
//! (the tree-sitter based Go loader, or any external toolchain emitting JSON) is
//! expected to hand over packages whose type references are already resolved to
//! their owning packages and whose declared types carry their underlying shape.

use serde::{Deserialize, Serialize};

/// Identity of a package referenced from a type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageRef {
    /// Declared package name (`io`)
    pub name: String,

    /// Import path (`io`, `github.com/acme/app/store`)
    pub path: String,
}

impl PackageRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A parameter or result of a signature. Unnamed entries have an empty name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub name: String,
    pub ty: GoType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn unnamed(ty: GoType) -> Self {
        Self::new("", ty)
    }
}

/// Function or method signature. Variadic parameters are represented as slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub results: Vec<Param>,
}

impl Signature {
    pub fn new(params: Vec<Param>, results: Vec<Param>) -> Self {
        Self { params, results }
    }
}

/// Field of a struct type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub ty: GoType,

    /// Declared without a field name
    #[serde(default)]
    pub embedded: bool,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
        }
    }

    pub fn embedded(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: true,
        }
    }
}

/// Method declared directly in an interface body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMethod {
    pub name: String,
    pub signature: Signature,
}

impl InterfaceMethod {
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            signature,
        }
    }
}

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoType {
    /// Universe type (`int`, `string`, `error`, `any`, ...)
    Basic { name: String },

    /// Declared type; `package` is `None` only for universe-scoped names
    Named {
        name: String,
        #[serde(default)]
        package: Option<PackageRef>,
    },

    /// Type parameter of a generic declaration
    TypeParam { name: String },

    Pointer { elem: Box<GoType> },
    Slice { elem: Box<GoType> },
    Array { elem: Box<GoType> },
    Map { key: Box<GoType>, value: Box<GoType> },
    Chan { elem: Box<GoType> },
    Signature(Signature),
    Struct {
        #[serde(default)]
        fields: Vec<StructField>,
    },
    Interface {
        #[serde(default)]
        methods: Vec<InterfaceMethod>,
        #[serde(default)]
        embeddeds: Vec<GoType>,
    },
    Tuple {
        #[serde(default)]
        elems: Vec<GoType>,
    },
}

impl GoType {
    pub fn basic(name: impl Into<String>) -> Self {
        GoType::Basic { name: name.into() }
    }

    pub fn named(name: impl Into<String>, package: PackageRef) -> Self {
        GoType::Named {
            name: name.into(),
            package: Some(package),
        }
    }

    pub fn pointer(elem: GoType) -> Self {
        GoType::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: GoType) -> Self {
        GoType::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn array(elem: GoType) -> Self {
        GoType::Array {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: GoType, value: GoType) -> Self {
        GoType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(elem: GoType) -> Self {
        GoType::Chan {
            elem: Box::new(elem),
        }
    }

    /// True for struct bodies
    pub fn is_struct(&self) -> bool {
        matches!(self, GoType::Struct { .. })
    }

    /// True for interface bodies
    pub fn is_interface(&self) -> bool {
        matches!(self, GoType::Interface { .. })
    }
}

/// Top-level type declaration of a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeObject {
    pub name: String,

    /// `type A = B` rather than `type A B`
    #[serde(default)]
    pub alias: bool,

    /// Fully resolved underlying type
    pub underlying: GoType,
}

impl TypeObject {
    pub fn defined(name: impl Into<String>, underlying: GoType) -> Self {
        Self {
            name: name.into(),
            alias: false,
            underlying,
        }
    }

    pub fn alias(name: impl Into<String>, underlying: GoType) -> Self {
        Self {
            name: name.into(),
            alias: true,
            underlying,
        }
    }
}

/// Method declaration bound to a receiver type of the same package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Receiver base type name, without pointer or type arguments
    pub receiver: String,

    #[serde(default)]
    pub pointer_receiver: bool,

    pub name: String,
    pub signature: Signature,
}

impl MethodDecl {
    pub fn new(receiver: impl Into<String>, name: impl Into<String>, signature: Signature) -> Self {
        Self {
            receiver: receiver.into(),
            pointer_receiver: false,
            name: name.into(),
            signature,
        }
    }

    pub fn with_pointer_receiver(mut self) -> Self {
        self.pointer_receiver = true;
        self
    }
}

/// Import of another package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Import {
    pub path: String,

    /// Declared name of the imported package
    pub name: String,

    #[serde(default)]
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// One fully resolved package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticPackage {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub objects: Vec<TypeObject>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl SemanticPackage {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            imports: Vec::new(),
            objects: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Reference to this package for use inside [`GoType::Named`]
    pub fn package_ref(&self) -> PackageRef {
        PackageRef::new(&self.name, &self.path)
    }

    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn with_object(mut self, object: TypeObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }
}
