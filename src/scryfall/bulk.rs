//! Offline Scryfall lookups from a bulk data file
//!
//! The whole dataset is loaded once and indexed by card id and by
//! (lowercased set code, collector number). Lookups never touch the network.

use super::descriptor::CardDescriptor;
use crate::error::Result;
use crate::table::read_text;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default)]
pub struct BulkIndex {
    cards: Vec<CardDescriptor>,
    by_id: HashMap<String, usize>,
    by_set_number: HashMap<(String, String), usize>,
}

impl BulkIndex {
    /// Load a Scryfall bulk data JSON file (an array of card objects),
    /// gzipped or not
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading Scryfall bulk data from: {}", path.display());

        let content = read_text(path)?;
        let index = match serde_json::from_str::<Value>(&content)? {
            Value::Array(cards) => Self::from_cards(cards),
            _ => {
                log::warn!(
                    "Scryfall bulk data in {} is not a card list, ignoring it",
                    path.display()
                );
                Self::default()
            }
        };

        log::info!(
            "Indexed {} Scryfall cards ({} by set and collector number)",
            index.by_id.len(),
            index.by_set_number.len()
        );
        Ok(index)
    }

    /// Index raw card objects. Entries that are not card objects are skipped;
    /// later cards replace earlier ones under the same key.
    pub fn from_cards(cards: Vec<Value>) -> Self {
        let mut index = Self::default();
        for value in cards {
            if !value.is_object() {
                continue;
            }
            match serde_json::from_value::<CardDescriptor>(value) {
                Ok(card) => index.insert(card),
                Err(e) => log::debug!("Skipping unreadable bulk card: {}", e),
            }
        }
        index
    }

    fn insert(&mut self, card: CardDescriptor) {
        let slot = self.cards.len();
        if !card.id.is_empty() {
            self.by_id.insert(card.id.clone(), slot);
        }
        if !card.set.is_empty() && !card.collector_number.is_empty() {
            self.by_set_number
                .insert((card.set.to_lowercase(), card.collector_number.clone()), slot);
        }
        self.cards.push(card);
    }

    /// Look up a card by Scryfall id
    pub fn get(&self, scryfall_id: &str) -> Option<&CardDescriptor> {
        self.by_id.get(scryfall_id).map(|&slot| &self.cards[slot])
    }

    /// Look up a card by set code (any case) and collector number (as given)
    pub fn get_by_set_number(&self, set_code: &str, collector_number: &str) -> Option<&CardDescriptor> {
        self.by_set_number
            .get(&(set_code.to_lowercase(), collector_number.to_string()))
            .map(|&slot| &self.cards[slot])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
