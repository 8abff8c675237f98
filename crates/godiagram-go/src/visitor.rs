//! AST visitor lowering Go syntax trees into [`ParsedFile`]s

use crate::syntax::{
    FieldExpr, FuncExpr, ImportSpec, MethodDeclaration, MethodSpec, ParamExpr, ParsedFile,
    TypeExpr, TypeSpec,
};
use std::path::Path;
use tree_sitter::Node;

pub struct GoVisitor<'a> {
    source: &'a [u8],
    pub file: ParsedFile,
}

impl<'a> GoVisitor<'a> {
    pub fn new(source: &'a [u8], path: &Path) -> Self {
        Self {
            source,
            file: ParsedFile::new(path),
        }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").to_string()
    }

    /// Visit the top-level declarations of a `source_file` node
    pub fn visit_source_file(&mut self, root: Node) {
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_clause" => self.visit_package_clause(child),
                "import_declaration" => self.visit_import_declaration(child),
                "type_declaration" => self.visit_type_declaration(child),
                "method_declaration" => self.visit_method_declaration(child),
                _ => {}
            }
        }
    }

    fn visit_package_clause(&mut self, node: Node) {
        if let Some(name) = node.named_child(0) {
            self.file.package = self.node_text(name);
        }
    }

    fn visit_import_declaration(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "import_spec" => self.visit_import_spec(child),
                "import_spec_list" => self.visit_import_declaration(child),
                _ => {}
            }
        }
    }

    fn visit_import_spec(&mut self, node: Node) {
        let Some(path) = node.child_by_field_name("path") else {
            return;
        };
        let path = self
            .node_text(path)
            .trim_matches(|c| c == '"' || c == '`')
            .to_string();
        let alias = node.child_by_field_name("name").map(|n| self.node_text(n));
        self.file.imports.push(ImportSpec { path, alias });
    }

    fn visit_type_declaration(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "type_spec" => self.visit_type_spec(child, false),
                "type_alias" => self.visit_type_spec(child, true),
                _ => {}
            }
        }
    }

    fn visit_type_spec(&mut self, node: Node, alias: bool) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let type_params = node
            .child_by_field_name("type_parameters")
            .map(|list| self.type_parameter_names(list))
            .unwrap_or_default();

        let spec = TypeSpec {
            name: self.node_text(name),
            type_params,
            alias,
            ty: self.field_type(node, "type"),
        };
        self.file.types.push(spec);
    }

    fn visit_method_declaration(&mut self, node: Node) {
        let (Some(receiver), Some(name)) = (
            node.child_by_field_name("receiver"),
            node.child_by_field_name("name"),
        ) else {
            return;
        };
        let Some((receiver, pointer_receiver, type_params)) = self.receiver(receiver) else {
            return;
        };

        let method = MethodDeclaration {
            receiver,
            pointer_receiver,
            type_params,
            name: self.node_text(name),
            func: self.func_expr(node),
        };
        self.file.methods.push(method);
    }

    /// Base type name, pointer flag and bound type parameters of a receiver list
    fn receiver(&self, list: Node) -> Option<(String, bool, Vec<String>)> {
        let mut cursor = list.walk();
        let decl = list
            .named_children(&mut cursor)
            .find(|n| n.kind() == "parameter_declaration")?;

        let mut ty = decl.child_by_field_name("type")?;
        let mut pointer = false;
        loop {
            match ty.kind() {
                "pointer_type" => {
                    pointer = true;
                    ty = ty.named_child(0)?;
                }
                "parenthesized_type" => ty = ty.named_child(0)?,
                _ => break,
            }
        }

        if ty.kind() == "generic_type" {
            let base = ty.child_by_field_name("type")?;
            let params = ty
                .child_by_field_name("type_arguments")
                .map(|args| self.type_argument_names(args))
                .unwrap_or_default();
            return Some((self.node_text(base), pointer, params));
        }
        Some((self.node_text(ty), pointer, Vec::new()))
    }

    fn type_parameter_names(&self, list: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            let mut decl_cursor = decl.walk();
            for name in decl.children_by_field_name("name", &mut decl_cursor) {
                names.push(self.node_text(name));
            }
        }
        names
    }

    fn type_argument_names(&self, args: Node) -> Vec<String> {
        let mut cursor = args.walk();
        args.named_children(&mut cursor)
            .map(|arg| match arg.kind() {
                "type_elem" => arg.named_child(0).unwrap_or(arg),
                _ => arg,
            })
            .map(|arg| self.node_text(arg))
            .collect()
    }

    fn func_expr(&self, node: Node) -> FuncExpr {
        let params = node
            .child_by_field_name("parameters")
            .map(|list| self.parameters(list))
            .unwrap_or_default();
        let results = match node.child_by_field_name("result") {
            Some(list) if list.kind() == "parameter_list" => self.parameters(list),
            Some(ty) => vec![ParamExpr {
                name: String::new(),
                ty: self.type_expr(ty),
            }],
            None => Vec::new(),
        };
        FuncExpr { params, results }
    }

    fn parameters(&self, list: Node) -> Vec<ParamExpr> {
        let mut params = Vec::new();
        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            match decl.kind() {
                "parameter_declaration" => {
                    let ty = self.field_type(decl, "type");
                    let mut decl_cursor = decl.walk();
                    let names: Vec<String> = decl
                        .children_by_field_name("name", &mut decl_cursor)
                        .map(|n| self.node_text(n))
                        .collect();
                    if names.is_empty() {
                        params.push(ParamExpr {
                            name: String::new(),
                            ty,
                        });
                    } else {
                        for name in names {
                            params.push(ParamExpr {
                                name,
                                ty: ty.clone(),
                            });
                        }
                    }
                }
                "variadic_parameter_declaration" => {
                    let name = decl
                        .child_by_field_name("name")
                        .map(|n| self.node_text(n))
                        .unwrap_or_default();
                    params.push(ParamExpr {
                        name,
                        ty: TypeExpr::Slice(self.field_type(decl, "type").boxed()),
                    });
                }
                _ => {}
            }
        }
        params
    }

    fn field_type(&self, node: Node, field: &str) -> TypeExpr {
        node.child_by_field_name(field)
            .map(|n| self.type_expr(n))
            .unwrap_or(TypeExpr::Unknown)
    }

    fn inner_type(&self, node: Node) -> TypeExpr {
        node.named_child(0)
            .map(|n| self.type_expr(n))
            .unwrap_or(TypeExpr::Unknown)
    }

    fn type_expr(&self, node: Node) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" => TypeExpr::Name(self.node_text(node)),
            "qualified_type" => {
                let text = |field| {
                    node.child_by_field_name(field)
                        .map(|n| self.node_text(n))
                        .unwrap_or_default()
                };
                TypeExpr::Qualified {
                    package: text("package"),
                    name: text("name"),
                }
            }
            // Instantiations are reduced to their generic type
            "generic_type" => self.field_type(node, "type"),
            "pointer_type" => TypeExpr::Pointer(self.inner_type(node).boxed()),
            "slice_type" => TypeExpr::Slice(self.field_type(node, "element").boxed()),
            "array_type" | "implicit_length_array_type" => {
                TypeExpr::Array(self.field_type(node, "element").boxed())
            }
            "map_type" => TypeExpr::Map(
                self.field_type(node, "key").boxed(),
                self.field_type(node, "value").boxed(),
            ),
            "channel_type" => TypeExpr::Chan(self.field_type(node, "value").boxed()),
            "function_type" => TypeExpr::Func(self.func_expr(node)),
            "parenthesized_type" => self.inner_type(node),
            "struct_type" => TypeExpr::Struct(self.struct_fields(node)),
            "interface_type" => self.interface(node),
            "negated_type" => TypeExpr::Approx(self.inner_type(node).boxed()),
            "type_elem" | "constraint_elem" => self.type_elem(node),
            _ => TypeExpr::Unknown,
        }
    }

    fn struct_fields(&self, node: Node) -> Vec<FieldExpr> {
        let mut fields = Vec::new();
        let mut cursor = node.walk();
        let Some(list) = node
            .named_children(&mut cursor)
            .find(|n| n.kind() == "field_declaration_list")
        else {
            return fields;
        };

        let mut list_cursor = list.walk();
        for decl in list.named_children(&mut list_cursor) {
            if decl.kind() != "field_declaration" {
                continue;
            }
            let mut decl_cursor = decl.walk();
            let names: Vec<String> = decl
                .children_by_field_name("name", &mut decl_cursor)
                .map(|n| self.node_text(n))
                .collect();
            let ty = self.field_type(decl, "type");

            if names.is_empty() {
                let mut star_cursor = decl.walk();
                let pointer = decl.children(&mut star_cursor).any(|c| c.kind() == "*");
                let name = embedded_name(&ty);
                let ty = if pointer {
                    TypeExpr::Pointer(ty.boxed())
                } else {
                    ty
                };
                fields.push(FieldExpr {
                    name,
                    ty,
                    embedded: true,
                });
            } else {
                for name in names {
                    fields.push(FieldExpr {
                        name,
                        ty: ty.clone(),
                        embedded: false,
                    });
                }
            }
        }
        fields
    }

    fn interface(&self, node: Node) -> TypeExpr {
        let mut methods = Vec::new();
        let mut embeddeds = Vec::new();
        self.interface_elements(node, &mut methods, &mut embeddeds);
        TypeExpr::Interface { methods, embeddeds }
    }

    fn interface_elements(
        &self,
        node: Node,
        methods: &mut Vec<MethodSpec>,
        embeddeds: &mut Vec<TypeExpr>,
    ) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "method_elem" | "method_spec" => {
                    if let Some(name) = child.child_by_field_name("name") {
                        methods.push(MethodSpec {
                            name: self.node_text(name),
                            func: self.func_expr(child),
                        });
                    }
                }
                "method_spec_list" => self.interface_elements(child, methods, embeddeds),
                "type_elem" | "constraint_elem" | "interface_type_name" | "struct_elem" => {
                    embeddeds.push(self.type_elem(child))
                }
                "comment" => {}
                _ => embeddeds.push(self.type_expr(child)),
            }
        }
    }

    /// A single term, or a union of terms
    fn type_elem(&self, node: Node) -> TypeExpr {
        let mut cursor = node.walk();
        let mut terms: Vec<TypeExpr> = node
            .named_children(&mut cursor)
            .filter(|n| n.kind() != "comment")
            .map(|n| self.type_expr(n))
            .collect();
        match terms.len() {
            0 => TypeExpr::Name(self.node_text(node)),
            1 => terms.remove(0),
            _ => TypeExpr::Union(terms),
        }
    }
}

/// Field name implied by an embedded type
fn embedded_name(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Name(name) | TypeExpr::Qualified { name, .. } => name.clone(),
        TypeExpr::Pointer(inner) => embedded_name(inner),
        _ => String::new(),
    }
}
