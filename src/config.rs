use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default presets used when no settings file exists
pub const PRESET_SHOW_COUNTS: bool = true;
pub const PRESET_SHOW_RATES: bool = true;

const CONFIG_DIR_NAME: &str = "tidydex";
const CONFIG_FILE_NAME: &str = "settings.toml";

/// How the cleaned card list is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `pokemon_cards = [ ... ]` list literal
    #[default]
    Python,
    /// Cards and counts as one JSON object
    Json,
    /// One card per line
    Plain,
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File holding the known Pokemon names (plain list or PokeAPI JSON)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names_path: Option<PathBuf>,
    /// Format of the cleaned card list
    #[serde(default)]
    pub output: OutputFormat,
    /// Whether to print the category counts table
    #[serde(default = "default_show_counts")]
    pub show_counts: bool,
    /// Whether the counts table includes a percentage column
    #[serde(default = "default_show_rates")]
    pub show_rates: bool,
}

fn default_show_counts() -> bool {
    PRESET_SHOW_COUNTS
}

fn default_show_rates() -> bool {
    PRESET_SHOW_RATES
}

impl Config {
    /// Create a config with preset values
    pub fn preset() -> Self {
        Self {
            names_path: None,
            output: OutputFormat::default(),
            show_counts: PRESET_SHOW_COUNTS,
            show_rates: PRESET_SHOW_RATES,
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load config from `path` if it exists, otherwise fall back to presets
    pub fn load_or_preset(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading configuration from: {}", path.display());
            Self::load_from(path)
        } else {
            eprintln!("No config file found at: {} (using presets)", path.display());
            Ok(Self::preset())
        }
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, toml_string)
            .context("Failed to write config file")?;

        eprintln!("✓ Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Display the current configuration in a human-readable format
    pub fn display_config(&self) {
        eprintln!("\nCurrent configuration:");
        match &self.names_path {
            Some(path) => eprintln!("  Names file: {}", path.display()),
            None => eprintln!("  Names file: (none)"),
        }
        eprintln!("  Output: {:?}", self.output);
        eprintln!("  Show counts: {}", self.show_counts);
        eprintln!("  Show rates: {}", self.show_rates);
    }
}
