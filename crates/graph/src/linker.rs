use repomap_core::NodeRegistry;

/// Resolve every node's raw call references into `called_by` back-edges
///
/// References that resolve in the registry get a back-edge; everything else
/// stays dangling, silently. The pass clears all `called_by` lists first, so
/// re-invoking it reproduces the same edge set instead of doubling it.
pub fn link_calls(registry: &mut NodeRegistry) {
    log::debug!("Linking call graph over {} nodes", registry.len());

    for node in registry.nodes_mut() {
        node.called_by.clear();
    }

    // Two phases: resolve against an immutable registry, then apply, since
    // both sides of an edge live in the same storage.
    let mut edges: Vec<(String, String)> = Vec::new();
    for node in registry.nodes() {
        let source = node.path_key();
        for target in &node.calls {
            if registry.contains(target) {
                edges.push((target.clone(), source.clone()));
            }
        }
    }

    let resolved = edges.len();
    for (target, source) in edges {
        if let Some(node) = registry.get_mut(&target) {
            node.called_by.push(source);
        }
    }

    log::debug!("Linked {resolved} call edges");
}
