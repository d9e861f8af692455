use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tidydex::aggregate::create_card_list;
use tidydex::config::{Config, OutputFormat};
use tidydex::input::read_card_lines;
use tidydex::names::{load_or_empty, FileNameSource, PokemonNames};
use tidydex::report::{render_counts, render_json, render_list_as_code, render_plain};

#[derive(Parser, Debug)]
#[command(name = "tidydex", version, about = "Normalize and classify Pokemon TCG card name lists")]
struct Cli {
    /// Card list file, one card name per line
    cards: PathBuf,
    /// Known Pokemon names (plain list or saved PokeAPI JSON)
    #[arg(long)]
    names: Option<PathBuf>,
    /// Output format for the cleaned list
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Skip the category counts table
    #[arg(long)]
    no_counts: bool,
    /// Omit the percentage column from the counts table
    #[arg(long)]
    no_rates: bool,
    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
    /// Save the effective settings to the settings file
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Command-line flags take precedence over the settings file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(names) = &self.names {
            config.names_path = Some(names.clone());
        }
        if let Some(format) = self.format {
            config.output = format;
        }
        if self.no_counts {
            config.show_counts = false;
        }
        if self.no_rates {
            config.show_rates = false;
        }
    }
}

fn load_names(config: &Config) -> PokemonNames {
    match &config.names_path {
        Some(path) => load_or_empty(&FileNameSource::new(path)),
        None => {
            log::warn!("No names file configured; every card will be counted as a trainer");
            PokemonNames::empty()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_config_path()?,
    };
    let mut config = Config::load_or_preset(&config_path)?;
    cli.apply_overrides(&mut config);
    log::debug!("Effective config: {:?}", config);

    if cli.save_config {
        config.save_to(&config_path)?;
        config.display_config();
    }

    let names = load_names(&config);
    let lines = read_card_lines(&cli.cards)?;
    let card_list = create_card_list(&lines, &names);

    match config.output {
        OutputFormat::Python => print!("{}", render_list_as_code(&card_list.cards)),
        OutputFormat::Plain => print!("{}", render_plain(&card_list.cards)),
        // Counts are part of the JSON document, so no table follows it
        OutputFormat::Json => {
            println!("{}", render_json(&card_list)?);
            return Ok(());
        }
    }

    if config.show_counts {
        print!("{}", render_counts(&card_list.counts, config.show_rates));
    }

    Ok(())
}
