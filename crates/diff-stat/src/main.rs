//! Prints a `git diff --stat` style summary of unified diff input.
//!
//! Reads a diff from the path given as the first argument, or from stdin,
//! and prints one line per file entry plus a totals line. With `--json` the
//! full parsed model is dumped instead.

use anyhow::Context;
use diff_parser::{parse_unified_diff, DiffFile};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => path = Some(arg),
        }
    }

    let text = read_input(path.as_deref())?;
    let files = parse_unified_diff(&text);
    log::debug!(
        "parsed {} file entries from {} bytes of input",
        files.len(),
        text.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        print_summary(&files);
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_summary(files: &[DiffFile]) {
    let mut additions = 0;
    let mut deletions = 0;

    for file in files {
        let note = if file.is_binary { "  (binary)" } else { "" };
        println!(
            "{} {}  +{} -{}{}",
            file.status().as_char(),
            file.display_name(),
            file.additions(),
            file.deletions(),
            note
        );
        additions += file.additions();
        deletions += file.deletions();
    }

    println!(
        "{} files changed, {} insertions(+), {} deletions(-)",
        files.len(),
        additions,
        deletions
    );
}

fn print_usage() {
    println!("Usage: diff-stat [--json] [PATH]");
    println!();
    println!("Parses unified diff text from PATH (or stdin) and prints a per-file");
    println!("change summary. With --json, dumps the parsed structure instead.");
}
