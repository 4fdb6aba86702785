//! Secondary identity resolution through Scryfall
//!
//! A run uses either the offline bulk index or the remote API, never both.
//! Lookup failures are soft: they are logged and treated as "no descriptor".

use super::bulk::BulkIndex;
use super::cache::DescriptorCache;
use super::client::ScryfallClient;
use super::descriptor::CardDescriptor;

#[derive(Debug)]
pub enum SecondaryResolver {
    Bulk(BulkIndex),
    Remote(ScryfallClient),
}

impl SecondaryResolver {
    /// Descriptor for a Scryfall id.
    ///
    /// In remote mode the cache is consulted first and successful fetches are
    /// stored in it.
    pub fn by_id(&self, scryfall_id: &str, cache: &mut DescriptorCache) -> Option<CardDescriptor> {
        match self {
            SecondaryResolver::Bulk(index) => index.get(scryfall_id).cloned(),
            SecondaryResolver::Remote(client) => {
                if let Some(card) = cache.get(scryfall_id) {
                    log::debug!("Cache hit for {}", scryfall_id);
                    return Some(card.clone());
                }
                match client.fetch_by_id(scryfall_id) {
                    Ok(card) => {
                        cache.insert(scryfall_id, card.clone());
                        Some(card)
                    }
                    Err(e) => {
                        log::warn!("Scryfall lookup failed for {}: {}", scryfall_id, e);
                        None
                    }
                }
            }
        }
    }

    /// Descriptor for a set code and collector number. Remote results are not
    /// cached, the cache is keyed by Scryfall id only.
    pub fn by_set_number(&self, set_code: &str, collector_number: &str) -> Option<CardDescriptor> {
        match self {
            SecondaryResolver::Bulk(index) => {
                index.get_by_set_number(set_code, collector_number).cloned()
            }
            SecondaryResolver::Remote(client) => {
                match client.fetch_by_set_number(set_code, collector_number) {
                    Ok(card) => Some(card),
                    Err(e) => {
                        log::warn!(
                            "Scryfall lookup failed for {}/{}: {}",
                            set_code,
                            collector_number,
                            e
                        );
                        None
                    }
                }
            }
        }
    }
}
