use crate::node::SemanticNode;
use std::collections::HashMap;

/// One scan session's worth of nodes, indexed by path key
///
/// Built fresh per scan by the scanner and passed by reference to the
/// linker, diff mapper and query layer. Path-key collisions across files
/// cannot occur because keys are file-prefixed.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<SemanticNode>,
    by_path: HashMap<String, usize>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SemanticNode) {
        let key = node.path_key();
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.by_path.insert(key, idx);
    }

    pub fn get(&self, path_key: &str) -> Option<&SemanticNode> {
        self.by_path.get(path_key).map(|&idx| &self.nodes[idx])
    }

    pub fn get_mut(&mut self, path_key: &str) -> Option<&mut SemanticNode> {
        let idx = *self.by_path.get(path_key)?;
        Some(&mut self.nodes[idx])
    }

    pub fn contains(&self, path_key: &str) -> bool {
        self.by_path.contains_key(path_key)
    }

    pub fn nodes(&self) -> &[SemanticNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [SemanticNode] {
        &mut self.nodes
    }

    /// Nodes belonging to one file, in extraction order
    pub fn nodes_for_file<'a>(&'a self, file_path: &'a str) -> impl Iterator<Item = &'a SemanticNode> {
        self.nodes.iter().filter(move |n| n.file_path == file_path)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
