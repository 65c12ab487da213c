use crate::parser::{ChangeStatus, FileChange};
use repomap_core::SemanticNode;
use std::collections::HashSet;

/// Map one file's diff onto its semantic nodes
///
/// A node is changed iff its inclusive span contains at least one
/// added-or-removed line number; context lines never count. Results keep
/// input order and are deduplicated by path key. Deleted files contribute
/// nothing: there is no new tree to map onto.
pub fn changed_nodes<'a>(
    change: &FileChange,
    nodes: impl IntoIterator<Item = &'a SemanticNode>,
) -> Vec<&'a SemanticNode> {
    if change.status == ChangeStatus::Deleted {
        return Vec::new();
    }

    let changed_lines: HashSet<usize> = change
        .added_lines
        .iter()
        .chain(change.removed_lines.iter())
        .map(|(line, _)| *line)
        .collect();

    let mut seen = HashSet::new();
    let mut changed = Vec::new();

    for node in nodes {
        if node.file_path != change.new_path {
            continue;
        }
        if !changed_lines.iter().any(|&line| node.spans_line(line)) {
            continue;
        }
        if seen.insert(node.path_key()) {
            changed.push(node);
        }
    }

    changed
}
