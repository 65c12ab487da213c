use crate::extractor::{field_text, line_span, node_text, qualify, Extractor};
use repomap_core::{Language, NodeKind, SemanticNode};
use tree_sitter::Node;

/// Extract semantic nodes from Java code
///
/// Classes, enums and interfaces all emit a Type node; enum and interface
/// bodies can carry methods and are walked the same way as class bodies.
pub struct JavaExtractor;

impl Extractor for JavaExtractor {
    fn language(&self) -> Language {
        Language::Java
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
        "class_declaration" | "enum_declaration" | "interface_declaration" => {
            let Some(type_name) = field_text(node, "name", source) else {
                return;
            };
            let (start, end) = line_span(node);
            out.push(SemanticNode::new(
                type_name,
                NodeKind::Type,
                Language::Java,
                file_path,
                start,
                end,
            ));

            if let Some(body) = node.child_by_field_name("body") {
                let mut cursor = body.walk();
                for child in body.children(&mut cursor) {
                    walk(child, source, file_path, Some(type_name), out);
                }
            }
        }
        "method_declaration" => {
            let Some(method_name) = field_text(node, "name", source) else {
                return;
            };
            let (start, end) = line_span(node);
            let kind = if owner.is_some() {
                NodeKind::Method
            } else {
                NodeKind::Function
            };
            let mut method =
                SemanticNode::new(method_name, kind, Language::Java, file_path, start, end);
            method.owning_type = owner.map(str::to_string);

            if let Some(params) = node.child_by_field_name("parameters") {
                let mut cursor = params.walk();
                for child in params.children(&mut cursor) {
                    if child.kind() == "formal_parameter" {
                        if let Some(param) = field_text(child, "name", source) {
                            method.parameters.push(param.to_string());
                        }
                    }
                }
            }

            method.return_type = field_text(node, "type", source).map(str::to_string);
            find_calls(node, source, file_path, owner, &mut method.calls);
            out.push(method);
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
    if node.kind() == "method_invocation" {
        if let Some(method_name) = field_text(node, "name", source) {
            let object = node.child_by_field_name("object").and_then(|n| node_text(n, source));
            let qualified = match object {
                Some(object) => {
                    let target_owner = match owner {
                        Some(owner) if object == "this" || object == owner => Some(owner),
                        _ => Some(object),
                    };
                    qualify(file_path, target_owner, method_name)
                }
                // An objectless invocation inside a type is indistinguishable
                // from a same-type member call.
                None => qualify(file_path, owner, method_name),
            };
            calls.push(qualified);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        find_calls(child, source, file_path, owner, calls);
    }
}
