//! Interprets the header lines of a single file block.

use super::segment::FILE_MARKER;

/// Marker line beginning a hunk.
pub(crate) const HUNK_MARKER: &str = "@@";

const DEV_NULL: &str = "/dev/null";

/// Result of scanning a file block's header: paths, flags, and the index
/// where hunk data begins.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FileHeader {
    pub old_path: String,
    pub new_path: String,
    pub is_binary: bool,
    pub is_renamed: bool,
    /// Index of the first hunk header within the block, or the block length
    /// when the block has no hunks.
    pub body_start: usize,
}

/// Scan a file block from the top until a binary marker or the first hunk
/// header is found (or the block is exhausted).
///
/// The `diff --git` line provides provisional paths; `rename from/to` and
/// `---`/`+++` lines overwrite them when present. Absent markers leave the
/// corresponding path empty. Never fails.
pub(crate) fn scan_file_header(block: &[&str]) -> FileHeader {
    let mut header = FileHeader::default();
    let mut i = 0;

    while i < block.len() {
        let line = block[i];

        if line.starts_with(FILE_MARKER) {
            let (old, new) = extract_entry_paths(line);
            header.old_path = old;
            header.new_path = new;
        } else if let Some(path) = line.strip_prefix("rename from ") {
            // Rename paths carry no a/ b/ prefix; take them verbatim.
            header.is_renamed = true;
            header.old_path = path.to_string();
        } else if let Some(path) = line.strip_prefix("rename to ") {
            header.new_path = path.to_string();
        } else if let Some(path) = line.strip_prefix("--- ") {
            header.old_path = clean_marker_path(path, "a/");
        } else if let Some(path) = line.strip_prefix("+++ ") {
            header.new_path = clean_marker_path(path, "b/");
        } else if line.contains("Binary files") {
            header.is_binary = true;
            break;
        } else if line.starts_with(HUNK_MARKER) {
            break;
        }

        i += 1;
    }

    header.body_start = i;
    header
}

/// Extract the two path tokens from a `diff --git a/old b/new` line.
fn extract_entry_paths(line: &str) -> (String, String) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return (String::new(), String::new());
    }
    (clean_path(parts[2], "a/"), clean_path(parts[3], "b/"))
}

/// Path following a `--- ` / `+++ ` marker: the `/dev/null` sentinel is kept
/// literal, otherwise the side prefix is stripped when present.
fn clean_marker_path(path: &str, prefix: &str) -> String {
    if path == DEV_NULL {
        return DEV_NULL.to_string();
    }
    clean_path(path, prefix)
}

fn clean_path(path: &str, prefix: &str) -> String {
    path.strip_prefix(prefix).unwrap_or(path).to_string()
}
