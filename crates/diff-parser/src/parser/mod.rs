//! Parse unified diff text into the structured model.
//!
//! Three stages run per parse: the segmenter splits the text into per-file
//! blocks, the header scanner pulls paths and flags out of each block, and
//! the hunk parser classifies and numbers everything that follows. A
//! [`Checkpoint`] threads through all three so large parses can be
//! abandoned cooperatively.

mod header;
mod hunk;
mod segment;

use crate::cancel::Checkpoint;
use crate::model::DiffFile;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur during diff parsing.
///
/// Malformed input is never an error: garbled headers and missing fields
/// degrade to a best-effort structured result. The only failure mode is a
/// caller-requested cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("diff parse cancelled by caller")]
    Cancelled,
}

/// Parse unified diff text into structured file entries.
///
/// Empty or marker-less input yields an empty vector. This entry point
/// cannot fail; for large inputs prefer [`parse_unified_diff_with_cancel`]
/// or [`parse_unified_diff_task`] so the work can be abandoned.
///
/// # Example
/// ```
/// let files = diff_parser::parse_unified_diff("");
/// assert!(files.is_empty());
/// ```
pub fn parse_unified_diff(text: &str) -> Vec<DiffFile> {
    match parse_lines(text, &mut Checkpoint::disabled()) {
        Ok(files) => files,
        // A disabled checkpoint never signals cancellation.
        Err(ParseError::Cancelled) => Vec::new(),
    }
}

/// Parse unified diff text, observing a cancellation token between files,
/// between hunks, and periodically within large hunks.
///
/// Returns `Err(ParseError::Cancelled)` once the token is cancelled; no
/// partial result is ever returned.
pub fn parse_unified_diff_with_cancel(
    text: &str,
    cancel: &CancellationToken,
) -> Result<Vec<DiffFile>, ParseError> {
    parse_lines(text, &mut Checkpoint::new(cancel))
}

/// Parse unified diff text on the blocking thread pool, so a presentation
/// thread can await the result instead of stalling on a huge diff.
///
/// # Example
/// ```rust,ignore
/// let cancel = CancellationToken::new();
/// let files = parse_unified_diff_task(diff_text, cancel.clone()).await?;
/// ```
pub async fn parse_unified_diff_task(
    text: String,
    cancel: CancellationToken,
) -> Result<Vec<DiffFile>, ParseError> {
    let handle =
        tokio::task::spawn_blocking(move || parse_unified_diff_with_cancel(&text, &cancel));
    match handle.await {
        Ok(result) => result,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        // The runtime only aborts blocking work at shutdown; report it the
        // same way as an explicit cancellation.
        Err(_) => Err(ParseError::Cancelled),
    }
}

fn parse_lines(text: &str, checkpoint: &mut Checkpoint<'_>) -> Result<Vec<DiffFile>, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let blocks = segment::split_file_blocks(&lines);

    let mut files = Vec::with_capacity(blocks.len());
    for block in blocks {
        checkpoint.poll()?;
        files.push(parse_file_block(block, checkpoint)?);
    }

    log::debug!("parsed {} file entries", files.len());
    Ok(files)
}

fn parse_file_block(
    block: &[&str],
    checkpoint: &mut Checkpoint<'_>,
) -> Result<DiffFile, ParseError> {
    let file_header = header::scan_file_header(block);

    // Binary entries carry no hunk data; header scanning already stopped.
    let hunks = if file_header.is_binary {
        Vec::new()
    } else {
        hunk::parse_hunks(&block[file_header.body_start..], checkpoint)?
    };

    Ok(DiffFile {
        old_path: file_header.old_path,
        new_path: file_header.new_path,
        hunks,
        is_binary: file_header.is_binary,
        is_renamed: file_header.is_renamed,
    })
}
