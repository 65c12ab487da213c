use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static FILE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^diff --git a/(.*) b/(.*)$").expect("valid regex"));

static HUNK_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("valid regex"));

const NULL_DEVICE: &str = "/dev/null";

/// How one file changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Deleted,
    Renamed,
    Modified,
}

/// One contiguous changed region with old/new offsets and counts
#[derive(Debug, Clone)]
pub struct Hunk {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    /// Raw content lines with their +/-/space prefix
    pub lines: Vec<String>,
}

/// All changes to one file in a diff
///
/// Added lines carry absolute line numbers in the new file version, removed
/// lines in the old one.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub new_path: String,
    pub old_path: String,
    pub status: ChangeStatus,
    pub hunks: Vec<Hunk>,
    pub added_lines: Vec<(usize, String)>,
    pub removed_lines: Vec<(usize, String)>,
}

impl FileChange {
    fn new(old_path: String, new_path: String) -> Self {
        Self {
            new_path,
            old_path,
            status: ChangeStatus::Modified,
            hunks: Vec::new(),
            added_lines: Vec::new(),
            removed_lines: Vec::new(),
        }
    }
}

/// Parse unified-diff text into structured per-file changes
///
/// Line-oriented three-state machine, re-entrant per file block. Never
/// fails: unrecognizable input yields an empty list and a malformed hunk
/// header drops that hunk (its content lines are not attributed anywhere).
pub fn parse_diff(diff_text: &str) -> Vec<FileChange> {
    let mut changes: Vec<FileChange> = Vec::new();
    let mut current_file: Option<FileChange> = None;
    let mut current_hunk: Option<Hunk> = None;

    for line in diff_text.lines() {
        if line.starts_with("diff --git") {
            flush_hunk(&mut current_file, &mut current_hunk);
            if let Some(file) = current_file.take() {
                changes.push(file);
            }
            current_file = FILE_HEADER.captures(line).map(|caps| {
                FileChange::new(caps[1].to_string(), caps[2].to_string())
            });
            if current_file.is_none() {
                log::debug!("Unrecognized file header dropped: {line}");
            }
        } else if line.starts_with("@@") {
            flush_hunk(&mut current_file, &mut current_hunk);
            current_hunk = parse_hunk_header(line);
            if current_hunk.is_none() {
                log::debug!("Malformed hunk header dropped: {line}");
            }
        } else if let Some(hunk) = current_hunk.as_mut() {
            record_content_line(line, hunk, current_file.as_mut());
        } else if let Some(file) = current_file.as_mut() {
            record_header_line(line, file);
        }
    }

    flush_hunk(&mut current_file, &mut current_hunk);
    if let Some(file) = current_file.take() {
        changes.push(file);
    }

    changes
}

fn flush_hunk(current_file: &mut Option<FileChange>, current_hunk: &mut Option<Hunk>) {
    if let Some(hunk) = current_hunk.take() {
        if let Some(file) = current_file.as_mut() {
            file.hunks.push(hunk);
        }
    }
}

fn parse_hunk_header(line: &str) -> Option<Hunk> {
    let caps = HUNK_HEADER.captures(line)?;
    let number = |idx: usize, default: usize| {
        caps.get(idx)
            .map_or(Some(default), |m| m.as_str().parse().ok())
    };
    Some(Hunk {
        old_start: number(1, 0)?,
        old_count: number(2, 1)?,
        new_start: number(3, 0)?,
        new_count: number(4, 1)?,
        lines: Vec::new(),
    })
}

fn record_content_line(line: &str, hunk: &mut Hunk, file: Option<&mut FileChange>) {
    if line.starts_with('+') && !line.starts_with("+++") {
        // Position in the new file: hunk start plus prior new-side lines.
        let line_num = hunk.new_start + new_side_len(hunk);
        hunk.lines.push(line.to_string());
        if let Some(file) = file {
            file.added_lines.push((line_num, line[1..].to_string()));
        }
    } else if line.starts_with('-') && !line.starts_with("---") {
        let line_num = hunk.old_start + old_side_len(hunk);
        hunk.lines.push(line.to_string());
        if let Some(file) = file {
            file.removed_lines.push((line_num, line[1..].to_string()));
        }
    } else if line.starts_with(' ') {
        hunk.lines.push(line.to_string());
    }
}

fn new_side_len(hunk: &Hunk) -> usize {
    hunk.lines
        .iter()
        .filter(|l| l.starts_with('+') || l.starts_with(' '))
        .count()
}

fn old_side_len(hunk: &Hunk) -> usize {
    hunk.lines
        .iter()
        .filter(|l| l.starts_with('-') || l.starts_with(' '))
        .count()
}

fn record_header_line(line: &str, file: &mut FileChange) {
    if line.starts_with("new file") {
        file.status = ChangeStatus::Added;
    } else if line.starts_with("deleted file") {
        file.status = ChangeStatus::Deleted;
    } else if line.starts_with("rename from") {
        file.status = ChangeStatus::Renamed;
    } else if let Some(path) = line.strip_prefix("--- ") {
        if path == NULL_DEVICE {
            file.status = ChangeStatus::Added;
        } else {
            file.old_path = strip_side_prefix(path, "a/").to_string();
        }
    } else if let Some(path) = line.strip_prefix("+++ ") {
        if path == NULL_DEVICE {
            file.status = ChangeStatus::Deleted;
        } else {
            file.new_path = strip_side_prefix(path, "b/").to_string();
        }
    }
}

fn strip_side_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}
