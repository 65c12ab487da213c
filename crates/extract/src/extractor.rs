use repomap_core::{Language, SemanticNode};
use tree_sitter::Node;

/// Per-language entity and call extraction
///
/// One implementation per supported language, selected through
/// [`for_language`]. Extraction is a pure function of one file's parse tree
/// and bytes; raw call references are qualified but never resolved here.
pub trait Extractor: Sync {
    fn language(&self) -> Language;

    /// Walk the syntax tree and emit nodes with their raw call references
    fn extract(&self, root: Node, source: &[u8], file_path: &str) -> Vec<SemanticNode>;
}

/// Strategy lookup keyed by language tag
pub fn for_language(language: Language) -> &'static dyn Extractor {
    match language {
        Language::Python => &crate::python::PythonExtractor,
        Language::Java => &crate::java::JavaExtractor,
        Language::C => &crate::c::CExtractor,
        Language::Cpp => &crate::cpp::CppExtractor,
    }
}

/// Source text of a node, `None` on invalid UTF-8
pub(crate) fn node_text<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    node.utf8_text(source).ok()
}

/// Source text of a named field child
pub(crate) fn field_text<'a>(node: Node, field: &str, source: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name(field)
        .and_then(|child| node_text(child, source))
}

/// 1-indexed inclusive line span of a node
pub(crate) fn line_span(node: Node) -> (usize, usize) {
    (node.start_position().row + 1, node.end_position().row + 1)
}

/// Qualify a call target the way every component joins on it
pub(crate) fn qualify(file_path: &str, owner: Option<&str>, name: &str) -> String {
    match owner {
        Some(owner) => format!("{file_path}::{owner}.{name}"),
        None => format!("{file_path}::{name}"),
    }
}
