use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a card list file, one card per line.
///
/// A leading UTF-8 byte order mark is dropped, as spreadsheet exports
/// often carry one.
pub fn read_card_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read card list {}", path.display()))?;
    Ok(split_card_lines(&contents))
}

fn split_card_lines(contents: &str) -> Vec<String> {
    contents
        .strip_prefix('\u{feff}')
        .unwrap_or(contents)
        .lines()
        .map(str::to_string)
        .collect()
}
