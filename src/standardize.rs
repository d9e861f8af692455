use regex::Regex;
use std::sync::LazyLock;

use crate::categories::CategoryFlags;
use crate::names::PokemonNames;

/// Separator between the card name and its set numbering
const NUMBERING_SEPARATOR: char = '-';

static RE_FULL_ART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Full Art").expect("Invalid regex"));
static RE_GX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bGX\b").expect("Invalid regex"));
static RE_EX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bEX\b").expect("Invalid regex"));
// "VMAX" is a single word, so it never satisfies this on its own
static RE_V: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bV\b").expect("Invalid regex"));
static RE_VMAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bVMAX\b").expect("Invalid regex"));
static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid regex"));
/// Parenthesized annotation plus surrounding whitespace, non-nested
static RE_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("Invalid regex"));

/// A card line after standardization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardizedCard {
    /// Canonical lowercase card name
    pub name: String,
    /// Categories detected on the raw line
    pub flags: CategoryFlags,
}

/// Standardize one raw card line and classify it.
///
/// Classification looks at the raw line (trimmed) so original casing and
/// annotations such as "(Full Art)" are still visible.
pub fn standardize_card_name(line: &str, names: &PokemonNames) -> StandardizedCard {
    StandardizedCard {
        name: normalize(line),
        flags: classify(line, names),
    }
}

/// Detect the category flags of a raw card line
pub fn classify(line: &str, names: &PokemonNames) -> CategoryFlags {
    let original = line.trim();

    let full_art = RE_FULL_ART.is_match(original);
    let pokemon = contains_pokemon_name(original, names);

    CategoryFlags {
        trainer: !pokemon,
        pokemon,
        full_art,
        half_art: !full_art,
        gx: RE_GX.is_match(original),
        ex: RE_EX.is_match(original),
        v: RE_V.is_match(original),
        vmax: RE_VMAX.is_match(original),
    }
}

/// Whether any word before the first dash is a known Pokemon name
fn contains_pokemon_name(line: &str, names: &PokemonNames) -> bool {
    let card_name = line
        .split(NUMBERING_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_lowercase();

    RE_WORD
        .find_iter(&card_name)
        .any(|token| names.contains(token.as_str()))
}

/// Produce the canonical form of a raw card line.
///
/// Parentheticals are dropped, fully uppercase name tokens (e.g. "GX",
/// "VMAX") are moved behind the rest of the name, the numbering after the
/// first dash is appended and the whole thing is lowercased.
pub fn normalize(line: &str) -> String {
    let without_notes = RE_PARENTHETICAL.replace_all(line, " ");

    let (name_part, numbering_part) = match without_notes.split_once(NUMBERING_SEPARATOR) {
        Some((name, numbering)) => (name.trim(), numbering.trim()),
        None => (without_notes.trim(), ""),
    };

    let name = rearrange_uppercase_tokens(name_part);

    let standardized = if numbering_part.is_empty() {
        name
    } else {
        format!("{} {}", name, numbering_part)
    };

    standardized.to_lowercase()
}

/// Stable partition: other tokens first, then fully uppercase tokens
fn rearrange_uppercase_tokens(name: &str) -> String {
    let (uppercase, other): (Vec<&str>, Vec<&str>) =
        name.split_whitespace().partition(|token| is_fully_uppercase(token));

    other
        .into_iter()
        .chain(uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when no letter in `token` fails the uppercase test.
/// Tokens without letters ("044", "&") are trivially uppercase.
fn is_fully_uppercase(token: &str) -> bool {
    !token.chars().any(|c| c.is_alphabetic() && !c.is_uppercase())
}
