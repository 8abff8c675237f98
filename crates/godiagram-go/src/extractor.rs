//! Syntax extraction for Go source code

use godiagram_api::{LoadError, LoadResult};
use std::path::Path;
use tree_sitter::{Node, Parser};

use crate::syntax::ParsedFile;
use crate::visitor::GoVisitor;

/// Parse one Go source file into its unresolved declarations
///
/// Any syntax error fails the file with the position of the first
/// erroneous or missing node.
pub fn extract(source: &str, file_path: &Path) -> LoadResult<ParsedFile> {
    let mut parser = Parser::new();
    let language = tree_sitter_go::language();
    parser
        .set_language(&language)
        .map_err(|e| LoadError::ParseError(file_path.to_path_buf(), e.to_string()))?;

    let tree = parser.parse(source, None).ok_or_else(|| {
        LoadError::ParseError(file_path.to_path_buf(), "Failed to parse".to_string())
    })?;

    let root_node = tree.root_node();
    if root_node.has_error() {
        let (line, column, message) = match first_error(root_node) {
            Some(node) if node.is_missing() => {
                let position = node.start_position();
                (position.row + 1, position.column + 1, format!("missing {}", node.kind()))
            }
            Some(node) => {
                let position = node.start_position();
                (position.row + 1, position.column + 1, "unexpected syntax".to_string())
            }
            None => (0, 0, "Syntax error".to_string()),
        };
        return Err(LoadError::SyntaxError(
            file_path.to_path_buf(),
            line,
            column,
            message,
        ));
    }

    let mut visitor = GoVisitor::new(source.as_bytes(), file_path);
    visitor.visit_source_file(root_node);

    if visitor.file.package.is_empty() {
        return Err(LoadError::ParseError(
            file_path.to_path_buf(),
            "missing package clause".to_string(),
        ));
    }
    Ok(visitor.file)
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}
