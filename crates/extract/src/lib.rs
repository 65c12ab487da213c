//! # Repomap Extract
//!
//! Grammar-driven entity and call extraction plus the repository scanner.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> Scanner (walkdir, ignore-set pruning)
//!     │      └─> source files by extension
//!     │
//!     ├──> Extractor (one per language, tree-sitter walk)
//!     │      └─> SemanticNode[] with raw call references
//!     │
//!     └──> NodeRegistry (merged) ──> call-graph linker
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use repomap_extract::Scanner;
//!
//! fn main() -> Result<(), repomap_extract::ExtractError> {
//!     let outcome = Scanner::new("/path/to/repo").scan()?;
//!     println!("{} nodes from {} files", outcome.registry.len(), outcome.files_parsed);
//!     Ok(())
//! }
//! ```

mod c;
mod cpp;
mod error;
mod extractor;
mod java;
mod python;
mod scanner;

pub use error::{ExtractError, Result};
pub use extractor::{for_language, Extractor};
pub use scanner::{ScanOutcome, Scanner, DEFAULT_IGNORE_DIRS};
