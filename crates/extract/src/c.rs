use crate::extractor::{field_text, line_span, node_text, qualify, Extractor};
use repomap_core::{Language, NodeKind, SemanticNode};
use tree_sitter::Node;

/// Extract semantic nodes from C code
///
/// C has no owning types: everything is a free function and bare calls
/// always qualify against the file alone.
pub struct CExtractor;

impl Extractor for CExtractor {
    fn language(&self) -> Language {
        Language::C
    }

    fn extract(&self, root: Node, source: &[u8], file_path: &str) -> Vec<SemanticNode> {
        let mut nodes = Vec::new();
        walk(root, source, file_path, &mut nodes);
        nodes
    }
}

fn walk(node: Node, source: &[u8], file_path: &str, out: &mut Vec<SemanticNode>) {
    if node.kind() == "function_definition" {
        if let Some(declarator) = node.child_by_field_name("declarator") {
            if let Some(func_name) = function_name(declarator, source) {
                let (start, end) = line_span(node);
                let mut func =
                    SemanticNode::new(func_name, NodeKind::Function, Language::C, file_path, start, end);
                func.parameters = parameters(declarator, source);
                func.return_type = field_text(node, "type", source).map(str::to_string);
                find_calls(node, source, file_path, &mut func.calls);
                out.push(func);
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, file_path, out);
    }
}

/// Unwrap a declarator down to the function's identifier
pub(crate) fn function_name<'a>(declarator: Node, source: &'a [u8]) -> Option<&'a str> {
    match declarator.kind() {
        "function_declarator" => {
            let inner = declarator.child_by_field_name("declarator")?;
            match inner.kind() {
                "identifier" | "field_identifier" => node_text(inner, source),
                _ => None,
            }
        }
        "identifier" => node_text(declarator, source),
        _ => None,
    }
}

pub(crate) fn parameters(declarator: Node, source: &[u8]) -> Vec<String> {
    let mut params = Vec::new();
    if declarator.kind() != "function_declarator" {
        return params;
    }
    let Some(param_list) = declarator.child_by_field_name("parameters") else {
        return params;
    };
    let mut cursor = param_list.walk();
    for child in param_list.children(&mut cursor) {
        if child.kind() == "parameter_declaration" {
            // Pointer/array declarators are skipped; names only, best effort.
            if let Some(decl) = child.child_by_field_name("declarator") {
                if decl.kind() == "identifier" {
                    if let Some(param) = node_text(decl, source) {
                        params.push(param.to_string());
                    }
                }
            }
        }
    }
    params
}

fn find_calls(node: Node, source: &[u8], file_path: &str, calls: &mut Vec<String>) {
    if node.kind() == "call_expression" {
        if let Some(func) = node.child_by_field_name("function") {
            if func.kind() == "identifier" {
                if let Some(name) = node_text(func, source) {
                    calls.push(qualify(file_path, None, name));
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        find_calls(child, source, file_path, calls);
    }
}
