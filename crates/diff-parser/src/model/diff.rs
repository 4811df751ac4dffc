//! Diff data structures: files, hunks, and typed lines.

use serde::{Deserialize, Serialize};

/// A single file entry in a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFile {
    /// Path on the old side (`/dev/null` for added files).
    pub old_path: String,
    /// Path on the new side (`/dev/null` for deleted files).
    pub new_path: String,
    /// Change hunks, in source order. Empty for binary entries and
    /// pure renames.
    pub hunks: Vec<DiffHunk>,
    /// Whether a "Binary files ... differ" marker was seen.
    pub is_binary: bool,
    /// Whether `rename from` / `rename to` markers were seen.
    pub is_renamed: bool,
}

impl DiffFile {
    /// Name for display, showing the rename if applicable.
    pub fn display_name(&self) -> String {
        if self.is_renamed {
            return format!("{} → {}", self.old_path, self.new_path);
        }
        if self.new_path.is_empty() {
            self.old_path.clone()
        } else {
            self.new_path.clone()
        }
    }

    /// File status derived from the `/dev/null` sentinels and the
    /// rename flag.
    pub fn status(&self) -> FileStatus {
        if self.old_path == "/dev/null" {
            FileStatus::Added
        } else if self.new_path == "/dev/null" {
            FileStatus::Deleted
        } else if self.is_renamed {
            FileStatus::Renamed
        } else {
            FileStatus::Modified
        }
    }

    /// Number of added lines across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks.iter().map(DiffHunk::additions).sum()
    }

    /// Number of removed lines across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks.iter().map(DiffHunk::deletions).sum()
    }
}

/// File status in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl FileStatus {
    /// Single-character representation, as in `git status` short output.
    pub fn as_char(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Modified => 'M',
            FileStatus::Deleted => 'D',
            FileStatus::Renamed => 'R',
        }
    }
}

/// A contiguous change region (`@@ ... @@`) within a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    /// Starting line in the old file.
    pub old_start: u32,
    /// Number of old-file lines the hunk spans.
    pub old_count: u32,
    /// Starting line in the new file.
    pub new_start: u32,
    /// Number of new-file lines the hunk spans.
    pub new_count: u32,
    /// The raw header line, preserved verbatim for display
    /// (e.g. `@@ -10,5 +10,7 @@ fn example()`).
    pub header: String,
    /// Lines in this hunk, in source order.
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    /// Number of added lines in this hunk.
    pub fn additions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.kind() == LineKind::Added)
            .count()
    }

    /// Number of removed lines in this hunk.
    pub fn deletions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.kind() == LineKind::Removed)
            .count()
    }
}

/// A single line inside a hunk.
///
/// The variant carries exactly the line numbers that exist for its kind:
/// added lines have no old-file number and removed lines have no new-file
/// number, so an impossible combination cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffLine {
    /// Line present only in the new file (`+` prefix).
    Added { content: String, new_line: u32 },
    /// Line present only in the old file (`-` prefix).
    Removed { content: String, old_line: u32 },
    /// Line unchanged between versions, shown for orientation.
    Context {
        content: String,
        old_line: u32,
        new_line: u32,
    },
    /// Structural header row. Used by consumers when flattening hunks for
    /// display; never produced by the parser.
    Header { content: String },
}

impl DiffLine {
    /// Create an added line.
    pub fn added(content: impl Into<String>, new_line: u32) -> Self {
        DiffLine::Added {
            content: content.into(),
            new_line,
        }
    }

    /// Create a removed line.
    pub fn removed(content: impl Into<String>, old_line: u32) -> Self {
        DiffLine::Removed {
            content: content.into(),
            old_line,
        }
    }

    /// Create a context line.
    pub fn context(content: impl Into<String>, old_line: u32, new_line: u32) -> Self {
        DiffLine::Context {
            content: content.into(),
            old_line,
            new_line,
        }
    }

    /// The line kind, for matching without destructuring.
    pub fn kind(&self) -> LineKind {
        match self {
            DiffLine::Added { .. } => LineKind::Added,
            DiffLine::Removed { .. } => LineKind::Removed,
            DiffLine::Context { .. } => LineKind::Context,
            DiffLine::Header { .. } => LineKind::Header,
        }
    }

    /// Line text with its leading marker character stripped.
    pub fn content(&self) -> &str {
        match self {
            DiffLine::Added { content, .. }
            | DiffLine::Removed { content, .. }
            | DiffLine::Context { content, .. }
            | DiffLine::Header { content } => content,
        }
    }

    /// Line number in the old file (context and removed lines only).
    pub fn old_line(&self) -> Option<u32> {
        match self {
            DiffLine::Removed { old_line, .. } | DiffLine::Context { old_line, .. } => {
                Some(*old_line)
            }
            DiffLine::Added { .. } | DiffLine::Header { .. } => None,
        }
    }

    /// Line number in the new file (context and added lines only).
    pub fn new_line(&self) -> Option<u32> {
        match self {
            DiffLine::Added { new_line, .. } | DiffLine::Context { new_line, .. } => {
                Some(*new_line)
            }
            DiffLine::Removed { .. } | DiffLine::Header { .. } => None,
        }
    }
}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Added line (+).
    Added,
    /// Removed line (-).
    Removed,
    /// Unchanged line (for context).
    Context,
    /// Structural header row.
    Header,
}

impl LineKind {
    /// The prefix character for this line type.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Added => '+',
            LineKind::Removed => '-',
            LineKind::Context => ' ',
            LineKind::Header => '@',
        }
    }
}
