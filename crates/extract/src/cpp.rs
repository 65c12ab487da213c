use crate::c::{function_name, parameters};
use crate::extractor::{field_text, line_span, node_text, qualify, Extractor};
use repomap_core::{Language, NodeKind, SemanticNode};
use tree_sitter::Node;

/// Extract semantic nodes from C++ code
///
/// Shares declarator unwrapping with the C extractor; adds class bodies and
/// member-call resolution. A bare call inside a class is indistinguishable
/// from a member call and qualifies against the owner.
pub struct CppExtractor;

impl Extractor for CppExtractor {
    fn language(&self) -> Language {
        Language::Cpp
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
        "class_specifier" => {
            let Some(class_name) = field_text(node, "name", source) else {
                return;
            };
            let (start, end) = line_span(node);
            out.push(SemanticNode::new(
                class_name,
                NodeKind::Type,
                Language::Cpp,
                file_path,
                start,
                end,
            ));

            if let Some(body) = node.child_by_field_name("body") {
                let mut cursor = body.walk();
                for child in body.children(&mut cursor) {
                    walk(child, source, file_path, Some(class_name), out);
                }
            }
        }
        "function_definition" => {
            let Some(declarator) = node.child_by_field_name("declarator") else {
                return;
            };
            let Some(func_name) = function_name(declarator, source) else {
                return;
            };
            let (start, end) = line_span(node);
            let kind = if owner.is_some() {
                NodeKind::Method
            } else {
                NodeKind::Function
            };
            let mut func = SemanticNode::new(func_name, kind, Language::Cpp, file_path, start, end);
            func.owning_type = owner.map(str::to_string);
            func.parameters = parameters(declarator, source);
            func.return_type = field_text(node, "type", source).map(str::to_string);
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
    if node.kind() == "call_expression" {
        if let Some(func) = node.child_by_field_name("function") {
            match func.kind() {
                "identifier" => {
                    if let Some(name) = node_text(func, source) {
                        calls.push(qualify(file_path, owner, name));
                    }
                }
                "field_expression" => {
                    let field = func.child_by_field_name("field").and_then(|n| node_text(n, source));
                    let receiver = func
                        .child_by_field_name("argument")
                        .and_then(|n| node_text(n, source));
                    if let (Some(field), Some(receiver)) = (field, receiver) {
                        let target_owner = match owner {
                            Some(owner) if receiver == "this" || receiver == owner => Some(owner),
                            _ => Some(receiver),
                        };
                        calls.push(qualify(file_path, target_owner, field));
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
