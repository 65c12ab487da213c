use crate::error::{ExtractError, Result};
use crate::extractor::for_language;
use repomap_core::{Language, NodeRegistry};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tree_sitter::Parser;
use walkdir::{DirEntry, WalkDir};

/// Directories pruned before descent
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    ".svn",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    "env",
    "build",
    "dist",
    "target",
    "out",
    ".idea",
    ".vscode",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
];

/// Result of one repository scan
///
/// The registry already has its call graph linked; `files_failed` counts
/// files whose read or parse failed without aborting the scan.
#[derive(Debug)]
pub struct ScanOutcome {
    pub registry: NodeRegistry,
    pub files_parsed: usize,
    pub files_failed: usize,
}

/// Repository scanner: walk, extract per file, merge, link
pub struct Scanner {
    root: PathBuf,
    ignore: HashSet<String>,
}

impl Scanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ignore: DEFAULT_IGNORE_DIRS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Scanner with extra ignored directory names merged into the defaults
    pub fn with_ignores(root: impl AsRef<Path>, extra: impl IntoIterator<Item = String>) -> Self {
        let mut scanner = Self::new(root);
        scanner.ignore.extend(extra);
        scanner
    }

    /// Scan the repository tree and return the linked registry
    ///
    /// The only hard failure is a root that does not exist or is not a
    /// directory. Everything per-file is caught, counted and logged.
    pub fn scan(&self) -> Result<ScanOutcome> {
        if !self.root.is_dir() {
            return Err(ExtractError::InvalidRoot(format!(
                "not a directory: {}",
                self.root.display()
            )));
        }

        log::info!("Scanning repository at {}", self.root.display());

        let mut registry = NodeRegistry::new();
        let mut parsers: HashMap<Language, Parser> = HashMap::new();
        let mut files_parsed = 0usize;
        let mut files_failed = 0usize;

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Walk error: {err}");
                    files_failed += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(language) = Language::from_path(entry.path()) else {
                continue;
            };
            let rel_path = relative_path(&self.root, entry.path());

            match scan_file(&mut parsers, entry.path(), &rel_path, language, &mut registry) {
                Ok(()) => {
                    log::debug!("[{}] parsed {rel_path}", language.as_str());
                    files_parsed += 1;
                }
                Err(err) => {
                    log::warn!("Failed to extract {rel_path}: {err}");
                    files_failed += 1;
                }
            }
        }

        repomap_graph::link_calls(&mut registry);

        log::info!(
            "Scan complete: {} nodes from {files_parsed} files ({files_failed} failed)",
            registry.len()
        );

        Ok(ScanOutcome {
            registry,
            files_parsed,
            files_failed,
        })
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.ignore.contains(name.as_ref())
    }
}

fn scan_file(
    parsers: &mut HashMap<Language, Parser>,
    path: &Path,
    rel_path: &str,
    language: Language,
    registry: &mut NodeRegistry,
) -> Result<()> {
    let source = std::fs::read(path)?;

    let parser = match parsers.entry(language) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            let mut parser = Parser::new();
            parser
                .set_language(&language.tree_sitter_language())
                .map_err(|e| ExtractError::ParserError(e.to_string()))?;
            entry.insert(parser)
        }
    };

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| ExtractError::ParserError(format!("no tree for {rel_path}")))?;

    for node in for_language(language).extract(tree.root_node(), &source, rel_path) {
        registry.insert(node);
    }
    Ok(())
}

/// Repo-relative path with forward slashes, byte-for-byte stable across
/// platforms so path keys join everywhere
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let text = rel.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
