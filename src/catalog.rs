//! Set code to set name lookup, backed by a JSON cache of the Scryfall catalog

use crate::api::scryfall::{fetch_sets_from, ScryfallSet, ScryfallSetList, SCRYFALL_API_BASE};
use crate::error::{ConvertError, ConvertResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Anything that can turn a set code into a set name
pub trait SetResolver {
    /// Look up the set name for `code`; lookups are case-insensitive
    fn resolve(&self, code: &str) -> ConvertResult<&str>;
}

/// Set catalog keyed by uppercase set code
#[derive(Debug, Default, Clone)]
pub struct SetCatalog {
    sets: HashMap<String, ScryfallSet>,
}

/// Get the default catalog cache file path
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("decklist_converter")
        .join("scryfall_sets.json")
}

impl SetCatalog {
    /// Build a catalog from set objects, normalizing codes to uppercase
    pub fn from_sets(sets: Vec<ScryfallSet>) -> Self {
        let sets = sets
            .into_iter()
            .map(|set| (set.code.to_uppercase(), set))
            .collect();
        Self { sets }
    }

    /// Load the catalog from `cache_path`, or from the Scryfall API if there is
    /// no usable cache (or `refresh` is set)
    pub fn load(cache_path: &Path, refresh: bool) -> ConvertResult<Self> {
        Self::load_from(SCRYFALL_API_BASE, cache_path, refresh)
    }

    /// Same as [`SetCatalog::load`] against a Scryfall-compatible API at `base_url`
    pub fn load_from(base_url: &str, cache_path: &Path, refresh: bool) -> ConvertResult<Self> {
        if refresh {
            log::info!("Refresh requested, ignoring set cache at {}", cache_path.display());
        } else if let Some(catalog) = Self::read_cache(cache_path) {
            return Ok(catalog);
        }

        let catalog = Self::from_sets(fetch_sets_from(base_url)?);

        if let Err(e) = catalog.save(cache_path) {
            log::warn!("Failed to save set cache: {}", e);
        }

        Ok(catalog)
    }

    fn read_cache(path: &Path) -> Option<Self> {
        if !path.exists() {
            log::info!("No set cache at {}", path.display());
            return None;
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<ScryfallSetList>(&content) {
                Ok(list) => {
                    let catalog = Self::from_sets(list.data);
                    log::info!(
                        "Loaded set cache with {} entries from {}",
                        catalog.len(),
                        path.display()
                    );
                    Some(catalog)
                }
                Err(e) => {
                    log::warn!("Failed to parse set cache, fetching fresh: {}", e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read set cache, fetching fresh: {}", e);
                None
            }
        }
    }

    /// Save the catalog to disk in the same shape Scryfall's `/sets` returns
    pub fn save(&self, path: &Path) -> ConvertResult<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut data: Vec<ScryfallSet> = self.sets.values().cloned().collect();
        data.sort_by(|a, b| a.code.cmp(&b.code));
        let content = serde_json::to_string_pretty(&ScryfallSetList { data })?;
        std::fs::write(path, content)?;

        log::debug!("Saved set cache with {} entries", self.sets.len());
        Ok(())
    }

    /// Get a set by code (case-insensitive)
    pub fn get(&self, code: &str) -> Option<&ScryfallSet> {
        self.sets.get(&code.to_uppercase())
    }

    /// Get set count
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl SetResolver for SetCatalog {
    fn resolve(&self, code: &str) -> ConvertResult<&str> {
        // TODO: promo printings that retailers file under the parent set name
        self.get(code)
            .map(|set| set.name.as_str())
            .ok_or_else(|| ConvertError::SetNotFound(code.to_string()))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
