//! Text and JSON reports over scan and diff results.

use repomap_core::NodeRegistry;
use repomap_diff::{changed_nodes, FileChange};
use repomap_extract::ScanOutcome;
use repomap_graph::{neighborhood, node_source, search_functions, search_types, GraphStats};
use serde_json::{json, Value};
use std::path::Path;

pub fn print_scan_summary(outcome: &ScanOutcome) {
    let stats = GraphStats::collect(&outcome.registry);

    println!("{}", "=".repeat(60));
    println!("Parsed files:     {}", outcome.files_parsed);
    println!("Failed files:     {}", outcome.files_failed);
    println!("Total entities:   {}", stats.total_nodes);
    println!("  types:          {}", stats.types);
    println!("  functions:      {}", stats.functions);
    println!("  methods:        {}", stats.methods);
    println!("Call references:  {}", stats.call_references);
    println!("Resolved edges:   {}", stats.resolved_edges);

    println!("\nBy language:");
    for (language, count) in &stats.by_language {
        println!("  {language:10} {count}");
    }

    let mut files: Vec<_> = stats.by_file.iter().collect();
    files.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    println!("\nTop files by entity count:");
    for (file, count) in files.into_iter().take(10) {
        println!("  {count:5}  {file}");
    }
    println!("{}", "=".repeat(60));
}

pub fn print_changes(changes: &[FileChange], registry: &NodeRegistry) {
    for change in changes {
        let nodes = changed_nodes(change, registry.nodes_for_file(&change.new_path));
        println!("\n{} ({:?})", change.new_path, change.status);
        if nodes.is_empty() {
            println!("  no entities touched");
            continue;
        }
        for node in nodes {
            println!(
                "  {} [{}] lines {}-{}",
                node.path_key(),
                node.kind.as_str(),
                node.start_line,
                node.end_line
            );
            if let Some(hood) = neighborhood(registry, &node.path_key()) {
                for caller in hood.callers {
                    println!("    <- {}", caller.path_key());
                }
            }
        }
    }
}

pub fn changes_payload(changes: &[FileChange], registry: &NodeRegistry) -> Value {
    let files: Vec<Value> = changes
        .iter()
        .map(|change| {
            let nodes: Vec<Value> = changed_nodes(change, registry.nodes_for_file(&change.new_path))
                .into_iter()
                .map(|node| {
                    let callers: Vec<String> = neighborhood(registry, &node.path_key())
                        .map(|hood| hood.callers.iter().map(|c| c.path_key()).collect())
                        .unwrap_or_default();
                    json!({
                        "path_key": node.path_key(),
                        "kind": node.kind.as_str(),
                        "start_line": node.start_line,
                        "end_line": node.end_line,
                        "callers": callers,
                    })
                })
                .collect();
            json!({
                "file": change.new_path,
                "status": change.status,
                "changed": nodes,
            })
        })
        .collect();
    json!({ "files": files })
}

pub fn print_inspect(name: &str, root: &Path, registry: &NodeRegistry) {
    let functions = search_functions(registry, name);
    let types = search_types(registry, name);

    if functions.is_empty() && types.is_empty() {
        println!("No entity named '{name}' found.");
        return;
    }

    for node in functions.into_iter().chain(types) {
        println!("\n{} [{}]", node.path_key(), node.language.as_str());
        println!("  kind:       {}", node.kind.as_str());
        println!("  lines:      {}-{}", node.start_line, node.end_line);
        if let Some(owner) = &node.owning_type {
            println!("  owner:      {owner}");
        }
        if let Some(ret) = &node.return_type {
            println!("  returns:    {ret}");
        }
        if !node.parameters.is_empty() {
            println!("  parameters: {}", node.parameters.join(", "));
        }
        for call in &node.calls {
            println!("    -> {call}");
        }
        for caller in &node.called_by {
            println!("    <- {caller}");
        }
        println!("{}", node_source(root, node));
    }
}
