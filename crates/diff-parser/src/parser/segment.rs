//! Splits full diff text into per-file line blocks.

/// Marker line beginning a new file entry.
pub(crate) const FILE_MARKER: &str = "diff --git";

/// Split the diff's lines into contiguous blocks, one per file entry.
///
/// A block starts at each `diff --git` line and runs to the line before the
/// next one (or end of input). Lines before the first marker belong to no
/// file and are discarded; input without any marker yields no blocks.
pub(crate) fn split_file_blocks<'a>(lines: &'a [&'a str]) -> Vec<&'a [&'a str]> {
    let mut blocks = Vec::new();
    let mut start = None;

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with(FILE_MARKER) {
            if let Some(s) = start {
                blocks.push(&lines[s..i]);
            }
            start = Some(i);
        }
    }
    if let Some(s) = start {
        blocks.push(&lines[s..]);
    }

    blocks
}
