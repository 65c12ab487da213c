use repomap_core::{NodeKind, NodeRegistry, SemanticNode};
use std::path::Path;

/// One-hop call context around a node, for context assembly
#[derive(Debug)]
pub struct CallNeighborhood<'a> {
    pub node: &'a SemanticNode,
    /// Nodes whose `calls` resolve to this node
    pub callers: Vec<&'a SemanticNode>,
    /// Nodes this node's `calls` resolve to
    pub callees: Vec<&'a SemanticNode>,
}

/// Resolve a node's one-hop callers and callees through the path map
///
/// Dangling entries on either side are skipped. Returns `None` when the
/// path key itself is unknown.
pub fn neighborhood<'a>(registry: &'a NodeRegistry, path_key: &str) -> Option<CallNeighborhood<'a>> {
    let node = registry.get(path_key)?;
    let callers = node
        .called_by
        .iter()
        .filter_map(|key| registry.get(key))
        .collect();
    let callees = node
        .calls
        .iter()
        .filter_map(|key| registry.get(key))
        .collect();
    Some(CallNeighborhood {
        node,
        callers,
        callees,
    })
}

/// Literal source text for a node, read by line range from the original file
///
/// A file that went missing or unreadable since the scan yields an inline
/// marker string instead of an error; callers embed it as-is.
pub fn node_source(root: impl AsRef<Path>, node: &SemanticNode) -> String {
    let path = root.as_ref().join(&node.file_path);
    match std::fs::read_to_string(&path) {
        Ok(text) => text
            .lines()
            .skip(node.start_line.saturating_sub(1))
            .take(node.end_line.saturating_sub(node.start_line) + 1)
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err) => format!("// could not read {}: {err}", node.file_path),
    }
}

/// Exact-name search over functions and methods
pub fn search_functions<'a>(registry: &'a NodeRegistry, name: &str) -> Vec<&'a SemanticNode> {
    registry
        .nodes()
        .iter()
        .filter(|n| n.name == name && matches!(n.kind, NodeKind::Function | NodeKind::Method))
        .collect()
}

/// Exact-name search over type nodes (classes, enums, interfaces)
pub fn search_types<'a>(registry: &'a NodeRegistry, name: &str) -> Vec<&'a SemanticNode> {
    registry
        .nodes()
        .iter()
        .filter(|n| n.name == name && n.kind == NodeKind::Type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link_calls;
    use repomap_core::{Language, NodeKind, NodeRegistry, SemanticNode};
    use std::io::Write;

    fn function(file: &str, name: &str, calls: &[&str]) -> SemanticNode {
        let mut node = SemanticNode::new(name, NodeKind::Function, Language::Python, file, 1, 2);
        node.calls = calls.iter().map(|s| (*s).to_string()).collect();
        node
    }

    #[test]
    fn test_neighborhood_resolves_both_directions() {
        let mut registry = NodeRegistry::new();
        registry.insert(function("m.py", "f", &["m.py::g", "m.py::dangling"]));
        registry.insert(function("m.py", "g", &[]));
        link_calls(&mut registry);

        let hood = neighborhood(&registry, "m.py::g").unwrap();
        assert_eq!(hood.callers.len(), 1);
        assert_eq!(hood.callers[0].path_key(), "m.py::f");

        let hood = neighborhood(&registry, "m.py::f").unwrap();
        assert_eq!(hood.callees.len(), 1, "dangling callee is skipped");
        assert_eq!(hood.callees[0].path_key(), "m.py::g");

        assert!(neighborhood(&registry, "m.py::nope").is_none());
    }

    #[test]
    fn test_node_source_reads_span() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("m.py")).unwrap();
        writeln!(file, "line one\nline two\nline three").unwrap();

        let mut node = function("m.py", "f", &[]);
        node.start_line = 2;
        node.end_line = 3;

        assert_eq!(node_source(dir.path(), &node), "line two\nline three");
    }

    #[test]
    fn test_node_source_missing_file_returns_marker() {
        let dir = tempfile::tempdir().unwrap();
        let node = function("gone.py", "f", &[]);
        let text = node_source(dir.path(), &node);
        assert!(text.starts_with("// could not read gone.py:"));
    }

    #[test]
    fn test_search_by_kind() {
        let mut registry = NodeRegistry::new();
        registry.insert(function("m.py", "f", &[]));
        let mut type_node = SemanticNode::new("f", NodeKind::Type, Language::Python, "t.py", 1, 3);
        type_node.calls = Vec::new();
        registry.insert(type_node);

        assert_eq!(search_functions(&registry, "f").len(), 1);
        assert_eq!(search_types(&registry, "f").len(), 1);
        assert!(search_functions(&registry, "missing").is_empty());
    }
}
