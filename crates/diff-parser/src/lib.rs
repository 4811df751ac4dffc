//! # diff-parser
//!
//! Parses raw unified-diff text (as produced by `git diff` or the `diff`
//! tool) into a structured, render-ready model: a sequence of files, each
//! containing change hunks, each containing typed lines with independent
//! old/new line numbering.
//!
//! ## Design Principles
//!
//! The parser is a pure text-to-structure transform — it never renders,
//! themes, or touches I/O. Malformed input degrades to a best-effort
//! structured result instead of failing: the only user-visible failure mode
//! is cooperative cancellation, requested by the caller through a
//! [`CancellationToken`] and observed between files, between hunks, and every
//! few hundred lines inside a hunk.
//!
//! ## Usage
//!
//! ```
//! use diff_parser::parse_unified_diff;
//!
//! let diff = "diff --git a/foo.txt b/foo.txt\n\
//!             --- a/foo.txt\n\
//!             +++ b/foo.txt\n\
//!             @@ -1,1 +1,1 @@\n\
//!             -old\n\
//!             +new";
//!
//! let files = parse_unified_diff(diff);
//! assert_eq!(files.len(), 1);
//! assert_eq!(files[0].new_path, "foo.txt");
//! ```
//!
//! For large diffs (tens of thousands of lines), run the parse off the
//! presentation thread and keep a handle on the token:
//!
//! ```rust,ignore
//! use diff_parser::{parse_unified_diff_task, CancellationToken};
//!
//! let cancel = CancellationToken::new();
//! let task = tokio::spawn(parse_unified_diff_task(diff_text, cancel.clone()));
//! // later, e.g. when the user navigates away:
//! cancel.cancel();
//! ```

pub mod cancel;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use model::{DiffFile, DiffHunk, DiffLine, FileStatus, LineKind};
pub use parser::{
    parse_unified_diff, parse_unified_diff_task, parse_unified_diff_with_cancel, ParseError,
};
pub use tokio_util::sync::CancellationToken;
