use crate::extractor::{field_text, line_span, node_text, qualify, Extractor};
use repomap_core::{Language, NodeKind, SemanticNode};
use tree_sitter::Node;

/// Extract semantic nodes from Python code
pub struct PythonExtractor;

impl Extractor for PythonExtractor {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extract(&self, root: Node, source: &[u8], file_path: &str) -> Vec<SemanticNode> {
        let mut nodes = Vec::new();
        walk(root, source, file_path, None, &mut nodes);
        nodes
    }
}

fn walk<'a>(
    node: Node<'a>,
    source: &'a [u8],
    file_path: &str,
    owner: Option<&str>,
    out: &mut Vec<SemanticNode>,
) {
    match node.kind() {
        "class_definition" => {
            // Anonymous or malformed constructs are dropped, not errors.
            let Some(class_name) = field_text(node, "name", source) else {
                return;
            };
            let (start, end) = line_span(node);
            out.push(SemanticNode::new(
                class_name,
                NodeKind::Type,
                Language::Python,
                file_path,
                start,
                end,
            ));

            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                walk(child, source, file_path, Some(class_name), out);
            }
        }
        "function_definition" => {
            let Some(func_name) = field_text(node, "name", source) else {
                return;
            };
            let (start, end) = line_span(node);
            let kind = if owner.is_some() {
                NodeKind::Method
            } else {
                NodeKind::Function
            };
            let mut func = SemanticNode::new(func_name, kind, Language::Python, file_path, start, end);
            func.owning_type = owner.map(str::to_string);

            if let Some(params) = node.child_by_field_name("parameters") {
                let mut cursor = params.walk();
                for child in params.children(&mut cursor) {
                    if child.kind() == "identifier" {
                        if let Some(param) = node_text(child, source) {
                            func.parameters.push(param.to_string());
                        }
                    }
                }
            }

            func.return_type = field_text(node, "return_type", source).map(str::to_string);
            find_calls(node, source, file_path, owner, &mut func.calls);
            out.push(func);
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                walk(child, source, file_path, owner, out);
            }
        }
    }
}

fn find_calls(node: Node, source: &[u8], file_path: &str, owner: Option<&str>, calls: &mut Vec<String>) {
    if node.kind() == "call" {
        if let Some(func) = node.child_by_field_name("function") {
            match func.kind() {
                // Bare call: Python member calls always go through a
                // receiver, so this is a free function.
                "identifier" => {
                    if let Some(name) = node_text(func, source) {
                        calls.push(qualify(file_path, None, name));
                    }
                }
                "attribute" => {
                    let object = func.child_by_field_name("object").and_then(|n| node_text(n, source));
                    let attr = func
                        .child_by_field_name("attribute")
                        .and_then(|n| node_text(n, source));
                    if let (Some(object), Some(attr)) = (object, attr) {
                        let target_owner = match owner {
                            Some(owner) if object == "self" || object == owner => Some(owner),
                            // Receiver treated as a type name; a syntax-only
                            // guess for instance-typed receivers.
                            _ => Some(object),
                        };
                        calls.push(qualify(file_path, target_owner, attr));
                    }
                }
                _ => {}
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        find_calls(child, source, file_path, owner, calls);
    }
}
