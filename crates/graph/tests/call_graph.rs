//! Tests for linking and querying a hand-built registry.

use repomap_core::{Language, NodeKind, NodeRegistry, SemanticNode};
use repomap_graph::{export_nodes, link_calls, neighborhood, GraphStats};

fn make_node(file: &str, name: &str, kind: NodeKind, start: usize, end: usize) -> SemanticNode {
    SemanticNode::new(name, kind, Language::Python, file, start, end)
}

fn make_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    let mut handler = make_node("srv.py", "handler", NodeKind::Function, 1, 10);
    handler.calls = vec!["srv.py::Auth.check".to_string(), "srv.py::render".to_string()];
    registry.insert(handler);

    registry.insert(make_node("srv.py", "Auth", NodeKind::Type, 12, 30));

    let mut check = make_node("srv.py", "check", NodeKind::Method, 14, 20);
    check.owning_type = Some("Auth".to_string());
    check.calls = vec!["srv.py::log_denied".to_string()];
    registry.insert(check);

    registry.insert(make_node("srv.py", "render", NodeKind::Function, 32, 40));

    registry
}

#[test]
fn test_link_then_query_symmetry() {
    let mut registry = make_registry();
    link_calls(&mut registry);

    let check = registry.get("srv.py::Auth.check").unwrap();
    assert_eq!(check.called_by, vec!["srv.py::handler"]);

    let hood = neighborhood(&registry, "srv.py::handler").unwrap();
    assert_eq!(hood.callees.len(), 2);
    assert!(hood.callers.is_empty());

    // log_denied was never extracted; the reference stays dangling and the
    // callee list only carries what resolved.
    let hood = neighborhood(&registry, "srv.py::Auth.check").unwrap();
    assert!(hood.callees.is_empty());
}

#[test]
fn test_stats_after_linking() {
    let mut registry = make_registry();
    link_calls(&mut registry);

    let stats = GraphStats::collect(&registry);
    assert_eq!(stats.total_nodes, 4);
    assert_eq!(stats.types, 1);
    assert_eq!(stats.functions, 2);
    assert_eq!(stats.methods, 1);
    assert_eq!(stats.call_references, 3);
    assert_eq!(stats.resolved_edges, 2);
    assert_eq!(stats.by_file["srv.py"], 4);
}

#[test]
fn test_export_counts_follow_links() {
    let mut registry = make_registry();
    link_calls(&mut registry);

    let exports = export_nodes(&registry);
    let check = exports.iter().find(|e| e.path_key == "srv.py::Auth.check").unwrap();
    assert_eq!(check.call_count, 1);
    assert_eq!(check.called_by_count, 1);
    assert_eq!(check.owning_type.as_deref(), Some("Auth"));
}
