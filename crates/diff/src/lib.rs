//! # Repomap Diff
//!
//! Unified-diff parsing and diff-to-entity mapping.
//!
//! ## Pipeline
//!
//! ```text
//! diff text (`diff --git` format)
//!     │
//!     ├──> parse_diff (line-oriented state machine)
//!     │      └─> FileChange[] with absolute added/removed line numbers
//!     │
//!     └──> changed_nodes (span intersection per file)
//!            └─> SemanticNode[] touched by the diff
//! ```
//!
//! Parsing never fails: malformed blocks degrade to dropped hunks or empty
//! output. Both passes are pure and safe to run concurrently for
//! independent diffs.

mod mapper;
mod parser;

pub use mapper::changed_nodes;
pub use parser::{parse_diff, ChangeStatus, FileChange, Hunk};
