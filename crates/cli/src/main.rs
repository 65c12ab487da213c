//! `repomap` binary: scan a repository, map diffs onto its entities.

mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use repomap_diff::parse_diff;
use repomap_extract::Scanner;
use repomap_graph::export_nodes;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repomap", version, about = "Semantic repository graph and diff mapping")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a repository and print the entity/call-graph summary
    Scan {
        path: PathBuf,
        /// Extra directory names to prune, on top of the defaults
        #[arg(long = "ignore")]
        ignore: Vec<String>,
        /// Emit the node export list as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Map a unified diff onto scanned entities
    Changes {
        path: PathBuf,
        /// File holding `diff --git` formatted text
        #[arg(long)]
        diff: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Look up functions and types by name
    Inspect {
        path: PathBuf,
        #[arg(long)]
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { path, ignore, json } => {
            let outcome = Scanner::with_ignores(&path, ignore).scan()?;
            if json {
                let exports = export_nodes(&outcome.registry);
                println!("{}", serde_json::to_string_pretty(&exports)?);
            } else {
                report::print_scan_summary(&outcome);
            }
        }
        Command::Changes { path, diff, json } => {
            let diff_text = std::fs::read_to_string(&diff)
                .with_context(|| format!("reading diff file {}", diff.display()))?;
            let outcome = Scanner::new(&path).scan()?;
            let changes = parse_diff(&diff_text);
            if json {
                let payload = report::changes_payload(&changes, &outcome.registry);
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                report::print_changes(&changes, &outcome.registry);
            }
        }
        Command::Inspect { path, name } => {
            let outcome = Scanner::new(&path).scan()?;
            report::print_inspect(&name, &path, &outcome.registry);
        }
    }

    Ok(())
}
