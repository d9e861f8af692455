//! Normalize trading-card name lists and classify each card.
//!
//! `standardize` turns one raw line into a canonical lowercase name plus
//! category flags; `aggregate` runs it over a whole list and tallies counts.

pub mod aggregate;
pub mod categories;
pub mod config;
pub mod input;
pub mod names;
pub mod report;
pub mod standardize;

pub use aggregate::{create_card_list, CardList};
pub use categories::{Category, CategoryFlags, Counts};
pub use names::{NameSource, PokemonNames};
pub use standardize::{standardize_card_name, StandardizedCard};
