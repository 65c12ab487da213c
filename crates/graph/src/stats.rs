use repomap_core::{NodeKind, NodeRegistry, SemanticNode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts for the reporting collaborator
#[derive(Debug, Default, Serialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub types: usize,
    pub functions: usize,
    pub methods: usize,
    pub by_language: BTreeMap<String, usize>,
    pub by_file: BTreeMap<String, usize>,
    /// Raw call references, resolved or not
    pub call_references: usize,
    /// References that resolved into back-edges at link time
    pub resolved_edges: usize,
}

impl GraphStats {
    pub fn collect(registry: &NodeRegistry) -> Self {
        let mut stats = Self {
            total_nodes: registry.len(),
            ..Self::default()
        };

        for node in registry.nodes() {
            match node.kind {
                NodeKind::Type => stats.types += 1,
                NodeKind::Function => stats.functions += 1,
                NodeKind::Method => stats.methods += 1,
            }
            *stats
                .by_language
                .entry(node.language.as_str().to_string())
                .or_default() += 1;
            *stats.by_file.entry(node.file_path.clone()).or_default() += 1;
            stats.call_references += node.calls.len();
            stats.resolved_edges += node.called_by.len();
        }

        stats
    }
}

/// Flat node view handed to the embedding/indexing collaborator
#[derive(Debug, Serialize)]
pub struct NodeExport {
    pub qualified_name: String,
    pub path_key: String,
    pub file_path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub kind: &'static str,
    pub language: &'static str,
    pub owning_type: Option<String>,
    pub parameters: Vec<String>,
    pub call_count: usize,
    pub called_by_count: usize,
}

impl NodeExport {
    pub fn from_node(node: &SemanticNode) -> Self {
        Self {
            qualified_name: node.qualified_name(),
            path_key: node.path_key(),
            file_path: node.file_path.clone(),
            start_line: node.start_line,
            end_line: node.end_line,
            kind: node.kind.as_str(),
            language: node.language.as_str(),
            owning_type: node.owning_type.clone(),
            parameters: node.parameters.clone(),
            call_count: node.calls.len(),
            called_by_count: node.called_by.len(),
        }
    }
}

/// Export the whole registry in extraction order
pub fn export_nodes(registry: &NodeRegistry) -> Vec<NodeExport> {
    registry.nodes().iter().map(NodeExport::from_node).collect()
}
