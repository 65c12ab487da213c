//! # Repomap Graph
//!
//! Call-graph linking and query layer over a scanned node registry.
//!
//! ## Architecture
//!
//! ```text
//! NodeRegistry (calls populated, called_by empty)
//!     │
//!     ├──> link_calls (reset, then resolve path keys)
//!     │      └─ dangling references stay dangling by design
//!     │
//!     └──> Queries
//!            ├─ neighborhood: one-hop callers/callees with spans
//!            ├─ node_source: literal text by line range
//!            ├─ search: exact-name lookup by kind
//!            └─ stats/export: reporting + indexing collaborators
//! ```

mod linker;
mod query;
mod stats;

pub use linker::link_calls;
pub use query::{neighborhood, node_source, search_functions, search_types, CallNeighborhood};
pub use stats::{export_nodes, GraphStats, NodeExport};
