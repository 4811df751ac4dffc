//! Cooperative cancellation for long-running parses.
//!
//! The parser never relies on scheduler preemption: a [`Checkpoint`] is
//! threaded through the file and hunk loops and polls the caller's
//! [`CancellationToken`] at bounded intervals — once per file block, once
//! per hunk, and every [`POLL_INTERVAL`] classified lines within a hunk.

use crate::parser::ParseError;
use tokio_util::sync::CancellationToken;

/// How many classified lines may pass inside a hunk between token polls.
pub const POLL_INTERVAL: u32 = 256;

/// Polls a cancellation token at parse boundaries.
///
/// A checkpoint with no token never fails, which is how the infallible
/// [`parse_unified_diff`](crate::parse_unified_diff) entry point is built
/// on the same loops as the cancellable one.
#[derive(Debug)]
pub struct Checkpoint<'a> {
    cancel: Option<&'a CancellationToken>,
    lines_since_poll: u32,
}

impl<'a> Checkpoint<'a> {
    /// Checkpoint observing the given token.
    pub fn new(cancel: &'a CancellationToken) -> Self {
        Self {
            cancel: Some(cancel),
            lines_since_poll: 0,
        }
    }

    /// Checkpoint that never signals cancellation.
    pub fn disabled() -> Checkpoint<'static> {
        Checkpoint {
            cancel: None,
            lines_since_poll: 0,
        }
    }

    /// Poll at a block boundary (file or hunk).
    pub fn poll(&mut self) -> Result<(), ParseError> {
        self.lines_since_poll = 0;
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(ParseError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Account for one classified line; polls every [`POLL_INTERVAL`] lines
    /// so a single huge hunk still observes cancellation promptly.
    pub fn tick(&mut self) -> Result<(), ParseError> {
        self.lines_since_poll += 1;
        if self.lines_since_poll >= POLL_INTERVAL {
            self.poll()
        } else {
            Ok(())
        }
    }
}
