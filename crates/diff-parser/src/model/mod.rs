//! Data model for parsed diffs.

mod diff;

pub use diff::{DiffFile, DiffHunk, DiffLine, FileStatus, LineKind};
