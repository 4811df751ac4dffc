//! Parses hunk headers and classifies hunk body lines.

use super::header::HUNK_MARKER;
use super::segment::FILE_MARKER;
use crate::cancel::Checkpoint;
use crate::model::{DiffHunk, DiffLine};
use crate::parser::ParseError;
use regex::Regex;
use std::sync::OnceLock;

/// Decoded `@@ -oldStart[,oldCount] +newStart[,newCount] @@` fields.
#[derive(Debug, PartialEq, Eq)]
struct HunkRange {
    old_start: u32,
    old_count: u32,
    new_start: u32,
    new_count: u32,
}

/// Parse every hunk in the tail of a file block, starting at its first hunk
/// header line.
///
/// Each hunk runs from its `@@` header to the line before the next header
/// (or end of block). Body lines are classified by first character: `+` is
/// an addition, `-` a removal, anything else a context line. Two counters
/// seeded from the header assign old/new line numbers as lines of the
/// matching side are consumed.
pub(crate) fn parse_hunks(
    block: &[&str],
    checkpoint: &mut Checkpoint<'_>,
) -> Result<Vec<DiffHunk>, ParseError> {
    let mut hunks = Vec::new();
    let mut i = 0;

    while i < block.len() {
        if !block[i].starts_with(HUNK_MARKER) {
            i += 1;
            continue;
        }
        checkpoint.poll()?;

        let header = block[i];
        let range = decode_hunk_header(header);
        let mut old_line = range.old_start;
        let mut new_line = range.new_start;
        let mut lines = Vec::new();

        i += 1;
        while i < block.len() {
            let line = block[i];
            if line.starts_with(HUNK_MARKER) || line.starts_with(FILE_MARKER) {
                break;
            }

            if let Some(content) = line.strip_prefix('+') {
                lines.push(DiffLine::added(content, new_line));
                new_line += 1;
            } else if let Some(content) = line.strip_prefix('-') {
                lines.push(DiffLine::removed(content, old_line));
                old_line += 1;
            } else {
                // Context line; empty lines land here too.
                let content = line.strip_prefix(' ').unwrap_or(line);
                lines.push(DiffLine::context(content, old_line, new_line));
                old_line += 1;
                new_line += 1;
            }

            checkpoint.tick()?;
            i += 1;
        }

        hunks.push(DiffHunk {
            old_start: range.old_start,
            old_count: range.old_count,
            new_start: range.new_start,
            new_count: range.new_count,
            header: header.to_string(),
            lines,
        });
    }

    Ok(hunks)
}

/// Decode a hunk header's four fields.
///
/// An omitted `,count` means a one-line span. A header the pattern cannot
/// match at all degrades to `(1, 0, 1, 0)` rather than failing the parse;
/// the substitution is logged so garbled input stays observable.
fn decode_hunk_header(header: &str) -> HunkRange {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HEADER_REGEX.get_or_init(|| {
        Regex::new(r"@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap()
    });

    let Some(caps) = re.captures(header) else {
        log::warn!("unrecognized hunk header {header:?}, substituting -1,0 +1,0");
        return HunkRange {
            old_start: 1,
            old_count: 0,
            new_start: 1,
            new_count: 0,
        };
    };

    HunkRange {
        old_start: parse_field(caps.get(1), 1),
        old_count: parse_count(caps.get(2)),
        new_start: parse_field(caps.get(3), 1),
        new_count: parse_count(caps.get(4)),
    }
}

fn parse_field(m: Option<regex::Match<'_>>, default: u32) -> u32 {
    m.and_then(|m| m.as_str().parse().ok()).unwrap_or(default)
}

fn parse_count(m: Option<regex::Match<'_>>) -> u32 {
    match m {
        // A present but overlong count degrades to 0, like any other
        // unusable count field.
        Some(m) => m.as_str().parse().unwrap_or(0),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range(old_start: u32, old_count: u32, new_start: u32, new_count: u32) -> HunkRange {
        HunkRange {
            old_start,
            old_count,
            new_start,
            new_count,
        }
    }

    #[test]
    fn test_decode_full_header() {
        assert_eq!(decode_hunk_header("@@ -1,5 +2,6 @@"), range(1, 5, 2, 6));
    }

    #[test]
    fn test_decode_header_with_section_text() {
        assert_eq!(
            decode_hunk_header("@@ -10,5 +10,7 @@ fn example()"),
            range(10, 5, 10, 7)
        );
    }

    #[test]
    fn test_omitted_count_defaults_to_one() {
        assert_eq!(decode_hunk_header("@@ -3 +7 @@"), range(3, 1, 7, 1));
        assert_eq!(decode_hunk_header("@@ -3,2 +7 @@"), range(3, 2, 7, 1));
    }

    #[test]
    fn test_undecodable_header_falls_back() {
        assert_eq!(decode_hunk_header("@@ garbage @@"), range(1, 0, 1, 0));
        assert_eq!(decode_hunk_header("@@"), range(1, 0, 1, 0));
    }

    #[test]
    fn test_single_hunk_lines_and_numbering() {
        let block = vec!["@@ -1,2 +1,3 @@", " line1", "-line2", "+line2 changed", "+line3"];
        let hunks = parse_hunks(&block, &mut Checkpoint::disabled()).unwrap();

        assert_eq!(hunks.len(), 1);
        let hunk = &hunks[0];
        assert_eq!(hunk.header, "@@ -1,2 +1,3 @@");
        assert_eq!(
            hunk.lines,
            vec![
                DiffLine::context("line1", 1, 1),
                DiffLine::removed("line2", 2),
                DiffLine::added("line2 changed", 2),
                DiffLine::added("line3", 3),
            ]
        );
    }

    #[test]
    fn test_counters_are_independent_per_hunk() {
        let block = vec![
            "@@ -1,2 +1,2 @@",
            " a",
            "-b",
            "+B",
            "@@ -5,2 +5,3 @@",
            " five",
            "-six",
            "+six!",
            "+seven",
        ];
        let hunks = parse_hunks(&block, &mut Checkpoint::disabled()).unwrap();

        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[1].lines[0], DiffLine::context("five", 5, 5));
        assert_eq!(hunks[1].lines[1], DiffLine::removed("six", 6));
        assert_eq!(hunks[1].lines[2], DiffLine::added("six!", 6));
        assert_eq!(hunks[1].lines[3], DiffLine::added("seven", 7));
    }

    #[test]
    fn test_empty_line_is_context_without_marker() {
        let block = vec!["@@ -1,3 +1,3 @@", " a", "", " c"];
        let hunks = parse_hunks(&block, &mut Checkpoint::disabled()).unwrap();
        assert_eq!(hunks[0].lines[1], DiffLine::context("", 2, 2));
        assert_eq!(hunks[0].lines[2], DiffLine::context("c", 3, 3));
    }

    #[test]
    fn test_context_without_leading_space_keeps_text() {
        let block = vec!["@@ -1,1 +1,1 @@", "\\ No newline at end of file"];
        let hunks = parse_hunks(&block, &mut Checkpoint::disabled()).unwrap();
        assert_eq!(
            hunks[0].lines[0],
            DiffLine::context("\\ No newline at end of file", 1, 1)
        );
    }

    #[test]
    fn test_header_with_no_body_yields_empty_hunk() {
        let block = vec!["@@ -4,0 +5,0 @@"];
        let hunks = parse_hunks(&block, &mut Checkpoint::disabled()).unwrap();
        assert_eq!(hunks.len(), 1);
        assert!(hunks[0].lines.is_empty());
    }

    #[test]
    fn test_fallback_hunk_numbers_from_one() {
        let block = vec!["@@ broken header", " ctx", "+add"];
        let hunks = parse_hunks(&block, &mut Checkpoint::disabled()).unwrap();

        let hunk = &hunks[0];
        assert_eq!(
            (hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count),
            (1, 0, 1, 0)
        );
        assert_eq!(hunk.lines[0], DiffLine::context("ctx", 1, 1));
        assert_eq!(hunk.lines[1], DiffLine::added("add", 2));
    }
}
