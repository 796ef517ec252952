//! Decklist Converter - MTG decklist format conversion
//!
//! Reads plain-text decklists, looks up each card's set name in the Scryfall
//! set catalog and writes the list out as a Card Kingdom CSV or a
//! pipe-separated decklist.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod parser;
pub mod pipeline;

// Re-export commonly used items
pub use api::{fetch_sets, ScryfallSet};
pub use catalog::{default_cache_path, SetCatalog, SetResolver};
pub use config::ConvertConfig;
pub use error::{ConvertError, ConvertResult};
pub use formatters::{format_card_kingdom_csv, format_decklist, format_records, OutputFormat};
pub use io::{read_decklist, write_output};
pub use models::{CardRecord, DecklistLine};
pub use parser::{parse_line, parse_lines, InputGrammar};
pub use pipeline::{convert, resolve_lines, run, run_with_resolver};
