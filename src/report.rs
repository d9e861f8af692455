use anyhow::{Context, Result};
use std::fmt::Write;

use crate::aggregate::CardList;
use crate::categories::Counts;

// Counts table display constants
const COLUMN_WIDTH_CATEGORY: usize = 10;
const COLUMN_WIDTH_COUNT: usize = 6;
const COLUMN_WIDTH_RATE: usize = 6;
const TABLE_WIDTH: usize = 30;
const PERCENTAGE_MULTIPLIER: f64 = 100.0;

/// Variable name used for the list literal output
const LIST_VARIABLE: &str = "pokemon_cards";

/// Render cards as a Python-style list literal, one card per line
pub fn render_list_as_code(cards: &[String]) -> String {
    let mut out = format!("{} = [\n", LIST_VARIABLE);
    for card in cards {
        let _ = writeln!(out, "    \"{}\",", escape_quoted(card));
    }
    out.push_str("]\n");
    out
}

fn escape_quoted(card: &str) -> String {
    card.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render cards one per line
pub fn render_plain(cards: &[String]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(card);
        out.push('\n');
    }
    out
}

/// Render the whole card list (cards and counts) as pretty JSON
pub fn render_json(card_list: &CardList) -> Result<String> {
    serde_json::to_string_pretty(card_list).context("Failed to serialize card list")
}

/// Render the category counts table.
///
/// With `rates`, each row also shows its share of all lines.
pub fn render_counts(counts: &Counts, rates: bool) -> String {
    let total = counts.lines();
    let mut out = String::from("\nCategory Counts:\n");

    if rates {
        let _ = writeln!(
            out,
            "{:<width_name$} | {:>width_count$} | {:>width_rate$}",
            "Category", "Count", "Rate",
            width_name = COLUMN_WIDTH_CATEGORY,
            width_count = COLUMN_WIDTH_COUNT,
            width_rate = COLUMN_WIDTH_RATE
        );
        let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
    }

    for (category, count) in counts.iter() {
        if rates {
            let percentage = if total == 0 {
                0.0
            } else {
                (count as f64 / total as f64) * PERCENTAGE_MULTIPLIER
            };
            let _ = writeln!(
                out,
                "{:<width_name$} | {:>width_count$} | {:>width_rate$.1}%",
                category.label(), count, percentage,
                width_name = COLUMN_WIDTH_CATEGORY,
                width_count = COLUMN_WIDTH_COUNT,
                width_rate = COLUMN_WIDTH_RATE - 1
            );
        } else {
            let _ = writeln!(out, "{}: {}", category.label(), count);
        }
    }

    if rates {
        let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
        let _ = writeln!(
            out,
            "{:<width_name$} | {:>width_count$}",
            "TOTAL", total,
            width_name = COLUMN_WIDTH_CATEGORY,
            width_count = COLUMN_WIDTH_COUNT
        );
    }

    out
}
