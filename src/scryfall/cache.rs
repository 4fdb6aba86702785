use super::descriptor::CardDescriptor;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Persistent cache for Scryfall id lookups
/// Stores descriptors in a JSON file to avoid redundant API calls
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(transparent)]
pub struct DescriptorCache {
    /// Map of Scryfall id to card data
    cards: HashMap<String, CardDescriptor>,
}

impl DescriptorCache {
    /// Load cache from disk, or create empty if it doesn't exist or is unreadable.
    /// Entries that are not card objects are dropped, the rest are kept.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<HashMap<String, Value>>(&content) {
                    Ok(entries) => {
                        let cache = Self::from_entries(entries);
                        log::info!("Loaded Scryfall cache with {} entries", cache.len());
                        return cache;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse cache file, starting fresh: {}", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read cache file, starting fresh: {}", e);
                }
            }
        }
        log::info!("Starting with empty Scryfall cache");
        Self::default()
    }

    fn from_entries(entries: HashMap<String, Value>) -> Self {
        let total = entries.len();
        let cards: HashMap<String, CardDescriptor> = entries
            .into_iter()
            .filter(|(_, value)| value.is_object())
            .filter_map(|(id, value)| {
                serde_json::from_value::<CardDescriptor>(value)
                    .ok()
                    .map(|card| (id, card))
            })
            .collect();
        if cards.len() < total {
            log::warn!(
                "Dropped {} unreadable Scryfall cache entries",
                total - cards.len()
            );
        }
        Self { cards }
    }

    /// Save cache to disk, replacing the old file only once the new one is written
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        std::fs::write(&tmp, serde_json::to_string(self)?)?;
        std::fs::rename(&tmp, path)?;

        log::debug!("Saved Scryfall cache with {} entries", self.cards.len());
        Ok(())
    }

    /// Get a card from cache
    pub fn get(&self, scryfall_id: &str) -> Option<&CardDescriptor> {
        self.cards.get(scryfall_id)
    }

    /// Insert a card into cache
    pub fn insert(&mut self, scryfall_id: &str, card: CardDescriptor) {
        self.cards.insert(scryfall_id.to_string(), card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(cardmarket_id: &str) -> CardDescriptor {
        CardDescriptor {
            cardmarket_id: Some(cardmarket_id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scryfall_cache.json");

        let mut cache = DescriptorCache::default();
        cache.insert("id-oko", card("101"));
        cache.save(&path).unwrap();

        assert!(!dir.path().join("nested").join("scryfall_cache.json.tmp").exists());
        let loaded = DescriptorCache::load(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get("id-oko").unwrap().cardmarket_id.as_deref(),
            Some("101")
        );
    }

    #[test]
    fn file_is_a_flat_id_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(
            &path,
            r#"{"id-normal": {"cardmarket_id": "100", "full_art": "false", "finishes": "nonfoil,foil"}}"#,
        )
        .unwrap();

        let cache = DescriptorCache::load(&path);
        let card = cache.get("id-normal").unwrap();
        assert_eq!(card.cardmarket_id.as_deref(), Some("100"));
        assert_eq!(card.finishes, vec!["nonfoil", "foil"]);
    }

    #[test]
    fn bad_entries_are_dropped_individually() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(
            &path,
            r#"{"good": {"cardmarket_id": "100"}, "bad": "oops", "worse": [1, 2]}"#,
        )
        .unwrap();

        let cache = DescriptorCache::load(&path);
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get("good").unwrap().cardmarket_id.as_deref(),
            Some("100")
        );
        assert!(cache.get("bad").is_none());
    }

    #[test]
    fn missing_file_gives_empty_cache() {
        let cache = DescriptorCache::load("/nonexistent/path/cache.json");
        assert!(cache.is_empty());
    }

    #[test]
    fn corrupt_file_gives_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(DescriptorCache::load(&path).is_empty());
    }
}
