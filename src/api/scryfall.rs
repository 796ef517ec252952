use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};

/// Base URL of the public Scryfall API
pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "Decklist-Converter/1.0";

/// Scryfall set object, see https://scryfall.com/docs/api/sets
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ScryfallSet {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<String>,
}

impl ScryfallSet {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            set_type: None,
            released_at: None,
        }
    }
}

/// List wrapper returned by `/sets`; the cache file uses the same shape
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ScryfallSetList {
    pub data: Vec<ScryfallSet>,
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ScryfallError {
    pub status: u16,
    pub code: String,
    pub details: String,
}

/// Fetch every set from Scryfall
pub fn fetch_sets() -> ConvertResult<Vec<ScryfallSet>> {
    fetch_sets_from(SCRYFALL_API_BASE)
}

/// Fetch every set from a Scryfall-compatible API rooted at `base_url`
pub fn fetch_sets_from(base_url: &str) -> ConvertResult<Vec<ScryfallSet>> {
    let url = format!("{}/sets", base_url.trim_end_matches('/'));

    log::info!("Fetching set catalog from Scryfall: {}", url);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/json")
        .send()?;

    let status = response.status();
    if status.is_success() {
        let list = response.json::<ScryfallSetList>()?;
        log::info!("Fetched {} sets from Scryfall", list.data.len());
        Ok(list.data)
    } else {
        match response.json::<ScryfallError>() {
            Ok(error) => Err(ConvertError::ApiResponse {
                code: error.code,
                details: error.details,
            }),
            Err(_) => Err(ConvertError::HttpStatus(status)),
        }
    }
}
