use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Set of known Pokemon names, stored lowercase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonNames {
    names: HashSet<String>,
}

impl PokemonNames {
    /// Build a name set, lowercasing every entry
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Membership test against an already-lowercased token
    pub fn contains(&self, token: &str) -> bool {
        self.names.contains(token)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Trait for anything that can supply the reference name set
pub trait NameSource {
    /// Fetch the full set of known names
    fn fetch(&self) -> Result<PokemonNames>;
}

/// Name source backed by an in-memory list
pub struct StaticNameSource {
    names: Vec<String>,
}

impl StaticNameSource {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameSource for StaticNameSource {
    fn fetch(&self) -> Result<PokemonNames> {
        Ok(PokemonNames::new(&self.names))
    }
}

/// Name source backed by a local file.
///
/// Accepts either a saved PokeAPI listing (`{"results": [{"name": ...}]}`)
/// or a plain text file with one name per line.
pub struct FileNameSource {
    path: PathBuf,
}

impl FileNameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NameSource for FileNameSource {
    fn fetch(&self) -> Result<PokemonNames> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read names file {}", self.path.display()))?;
        parse_names(&contents)
            .with_context(|| format!("Failed to parse names file {}", self.path.display()))
    }
}

#[derive(Deserialize)]
struct PokeApiListing {
    results: Vec<PokeApiEntry>,
}

#[derive(Deserialize)]
struct PokeApiEntry {
    name: String,
}

/// Parse a names document, detecting JSON by its leading `{`
pub fn parse_names(contents: &str) -> Result<PokemonNames> {
    let contents = contents.trim_start_matches('\u{feff}');
    if contents.trim_start().starts_with('{') {
        let listing: PokeApiListing =
            serde_json::from_str(contents).context("Invalid PokeAPI listing JSON")?;
        Ok(PokemonNames::new(listing.results.into_iter().map(|e| e.name)))
    } else {
        Ok(PokemonNames::new(contents.lines()))
    }
}

/// Fetch names from `source`, falling back to an empty set on failure.
///
/// An empty set classifies every card as a trainer, which keeps the
/// pipeline running when the reference list is unavailable.
pub fn load_or_empty(source: &dyn NameSource) -> PokemonNames {
    match source.fetch() {
        Ok(names) => {
            log::info!("Loaded {} Pokemon names", names.len());
            names
        }
        Err(e) => {
            log::warn!("Failed to retrieve Pokemon names: {e:#}");
            PokemonNames::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FailingSource;

    impl NameSource for FailingSource {
        fn fetch(&self) -> Result<PokemonNames> {
            Err(anyhow!("service unavailable"))
        }
    }

    #[test]
    fn names_are_lowercased_and_trimmed() {
        let names = PokemonNames::new(["Pikachu", "  CHARIZARD ", ""]);
        assert!(names.contains("pikachu"));
        assert!(names.contains("charizard"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn parses_pokeapi_listing() {
        let json = r#"{"count": 2, "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "Ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
        ]}"#;
        let names = parse_names(json).unwrap();
        assert!(names.contains("bulbasaur"));
        assert!(names.contains("ivysaur"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn parses_plain_list_skipping_blanks() {
        let names = parse_names("\u{feff}mewtwo\n\nEevee\r\n").unwrap();
        assert!(names.contains("mewtwo"));
        assert!(names.contains("eevee"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_names("{\"results\": 5}").is_err());
    }

    #[test]
    fn failing_source_degrades_to_empty() {
        assert!(load_or_empty(&FailingSource).is_empty());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let source = FileNameSource::new("/nonexistent/tidydex/names.txt");
        assert!(source.fetch().is_err());
        assert!(load_or_empty(&source).is_empty());
    }

    #[test]
    fn static_source_yields_its_names() {
        let names = load_or_empty(&StaticNameSource::new(["Snorlax"]));
        assert!(names.contains("snorlax"));
    }
}
