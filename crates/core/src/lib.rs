//! # Repomap Core
//!
//! Shared data model for the repository analysis pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! Repository
//!     │
//!     ├──> Scanner (walk + per-file extract)
//!     │      └─> SemanticNode[] ──> NodeRegistry
//!     │
//!     ├──> Call-graph linker
//!     │      └─> calls / called_by edges by path key
//!     │
//!     └──> Diff mapper
//!            └─> changed entities per file change
//! ```
//!
//! Every component joins on the path key `{file_path}::{qualified_name}`,
//! reproduced byte-for-byte by [`SemanticNode::path_key`].

mod language;
mod node;
mod registry;

pub use language::Language;
pub use node::{NodeKind, SemanticNode};
pub use registry::NodeRegistry;
