use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Kind of code entity a [`SemanticNode`] represents
///
/// `Type` covers classes, interfaces and enums uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Type,
    Function,
    Method,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Function => "function",
            Self::Method => "method",
        }
    }
}

/// A code entity (type, function or method) extracted from one source file
///
/// Line numbers are 1-indexed and inclusive. `calls` is written once at
/// extraction time and holds target path keys that may dangle; `called_by`
/// starts empty and is populated by the call-graph linker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticNode {
    pub name: String,
    pub kind: NodeKind,
    pub language: Language,
    /// Repository-relative path with `/` separators
    pub file_path: String,
    pub start_line: usize,
    pub end_line: usize,
    /// Set iff `kind == Method`
    pub owning_type: Option<String>,
    /// Parameter names in declaration order, no type info
    pub parameters: Vec<String>,
    /// Raw return-type text, when the grammar exposes one
    pub return_type: Option<String>,
    pub calls: Vec<String>,
    pub called_by: Vec<String>,
}

impl SemanticNode {
    pub fn new(
        name: impl Into<String>,
        kind: NodeKind,
        language: Language,
        file_path: impl Into<String>,
        start_line: usize,
        end_line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            language,
            file_path: file_path.into(),
            start_line,
            end_line,
            owning_type: None,
            parameters: Vec::new(),
            return_type: None,
            calls: Vec::new(),
            called_by: Vec::new(),
        }
    }

    /// `Owner.name` for members, else bare `name`
    pub fn qualified_name(&self) -> String {
        match &self.owning_type {
            Some(owner) => format!("{owner}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Globally unique join key within one scan: `{file_path}::{qualified_name}`
    pub fn path_key(&self) -> String {
        format!("{}::{}", self.file_path, self.qualified_name())
    }

    /// True when the inclusive line span contains `line`
    pub fn spans_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }
}
