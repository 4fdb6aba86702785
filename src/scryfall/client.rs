//! Blocking Scryfall API client
//!
//! Every request is followed by a fixed pause so a run never exceeds
//! Scryfall's rate limit. Requests are strictly sequential.

use super::descriptor::CardDescriptor;
use crate::error::{PriceFillError, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(120);

const USER_AGENT: &str = "D2D-Automations-PriceFill/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Scryfall API client with a per-request delay
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    base_url: String,
    delay: Duration,
    http: reqwest::blocking::Client,
}

impl ScryfallClient {
    /// Client for the public Scryfall API
    pub fn new(delay: Duration) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, delay)
    }

    /// Client for the given base URL (for testing with mock servers).
    pub fn with_base_url(base_url: &str, delay: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            delay,
            http,
        })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fetch a card by its Scryfall id
    pub fn fetch_by_id(&self, scryfall_id: &str) -> Result<CardDescriptor> {
        let url = format!(
            "{}/cards/{}",
            self.base_url,
            urlencoding::encode(scryfall_id.trim())
        );
        self.get_card(&url)
    }

    /// Fetch a card by set code and collector number
    pub fn fetch_by_set_number(
        &self,
        set_code: &str,
        collector_number: &str,
    ) -> Result<CardDescriptor> {
        let url = format!(
            "{}/cards/{}/{}",
            self.base_url,
            urlencoding::encode(&set_code.trim().to_lowercase()),
            urlencoding::encode(collector_number.trim())
        );
        self.get_card(&url)
    }

    fn get_card(&self, url: &str) -> Result<CardDescriptor> {
        let result = self.request(url);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        result
    }

    fn request(&self, url: &str) -> Result<CardDescriptor> {
        log::debug!("Fetching card from Scryfall: {}", url);

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json;q=0.9,*/*;q=0.8")
            .send()?;

        if !response.status().is_success() {
            return Err(PriceFillError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
