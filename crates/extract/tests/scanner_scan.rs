//! Tests for repository scanning: pruning, isolation, registry merge.

use repomap_extract::{ExtractError, Scanner};
use std::fs;
use std::path::Path;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_scan_merges_languages_into_one_registry() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/app.py", "def f():\n    g()\n\ndef g():\n    pass\n");
    write(dir.path(), "lib/util.c", "int add(int a, int b) {\n    return a + b;\n}\n");
    write(
        dir.path(),
        "Main.java",
        "class Main {\n    void run() {}\n}\n",
    );

    let outcome = Scanner::new(dir.path()).scan().unwrap();

    assert_eq!(outcome.files_parsed, 3);
    assert!(outcome.registry.contains("src/app.py::f"));
    assert!(outcome.registry.contains("src/app.py::g"));
    assert!(outcome.registry.contains("lib/util.c::add"));
    assert!(outcome.registry.contains("Main.java::Main"));
    assert!(outcome.registry.contains("Main.java::Main.run"));
}

#[test]
fn test_ignored_directories_are_pruned() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "keep.py", "def kept():\n    pass\n");
    write(dir.path(), "node_modules/dep.py", "def from_deps():\n    pass\n");
    write(dir.path(), ".git/hook.py", "def from_git():\n    pass\n");
    write(dir.path(), "__pycache__/cached.py", "def from_cache():\n    pass\n");

    let outcome = Scanner::new(dir.path()).scan().unwrap();

    assert_eq!(outcome.files_parsed, 1);
    assert!(outcome.registry.contains("keep.py::kept"));
    assert_eq!(outcome.registry.len(), 1);
}

#[test]
fn test_extra_ignores_merge_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "keep.py", "def kept():\n    pass\n");
    write(dir.path(), "generated/gen.py", "def generated():\n    pass\n");

    let outcome = Scanner::with_ignores(dir.path(), vec!["generated".to_string()])
        .scan()
        .unwrap();

    assert_eq!(outcome.registry.len(), 1);
    assert!(outcome.registry.contains("keep.py::kept"));
}

#[test]
fn test_unsupported_extensions_are_skipped_silently() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "app.py", "def f():\n    pass\n");
    write(dir.path(), "notes.txt", "not source code");
    write(dir.path(), "script.rb", "def ruby_method; end");

    let outcome = Scanner::new(dir.path()).scan().unwrap();

    assert_eq!(outcome.files_parsed, 1);
    assert_eq!(outcome.files_failed, 0);
}

#[test]
fn test_malformed_file_does_not_abort_scan() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.py", "def fine():\n    pass\n");
    // Invalid UTF-8 with a supported extension; extraction degrades to
    // skipping unreadable names instead of failing the scan.
    fs::write(dir.path().join("bad.py"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let outcome = Scanner::new(dir.path()).scan().unwrap();

    assert!(outcome.registry.contains("good.py::fine"));
}

#[test]
fn test_nonexistent_root_is_a_hard_error() {
    let result = Scanner::new("/definitely/not/a/real/path").scan();
    assert!(matches!(result, Err(ExtractError::InvalidRoot(_))));
}

#[test]
fn test_file_root_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "file.py", "def f():\n    pass\n");
    let result = Scanner::new(dir.path().join("file.py")).scan();
    assert!(matches!(result, Err(ExtractError::InvalidRoot(_))));
}
