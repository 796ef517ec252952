//! API client for the Scryfall set catalog

pub mod scryfall;


pub use scryfall::{fetch_sets, fetch_sets_from, ScryfallSet, ScryfallSetList};
