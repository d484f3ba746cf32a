//! HTTP access to the booking shop.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, error};

use super::config::{blp_shop, defaults};
use crate::domain::services::PageFetcher;
use crate::error::{ScoutError, ScoutResult};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: concat!("timeslot-scout/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Shared outbound HTTP client.
///
/// One instance serves both the listing fetch and the backend publish; the
/// configured timeout applies to every request it issues, and expiry counts
/// as a failed request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ScoutResult<Self> {
        Self::with_config(&HttpClientConfig::default())
    }

    pub fn with_config(config: &HttpClientConfig) -> ScoutResult<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ScoutError::config(&format!("could not build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    pub(crate) fn inner(&self) -> &Client {
        &self.client
    }

    /// Listing page URL for one calendar date.
    pub fn listing_url(date: NaiveDate) -> String {
        blp_shop::TIMESLOT_LIST_URL.replace("{}", &date.format("%Y-%m-%d").to_string())
    }
}

/// Decode a response body as ISO-8859-1.
///
/// The shop serves that encoding no matter what the response headers claim,
/// so the bytes map one to one onto the first 256 codepoints.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_listing(&self, date: NaiveDate) -> ScoutResult<String> {
        let url = Self::listing_url(date);
        debug!("requesting {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ScoutError::transport(&url, source))?;
        let status = response.status().as_u16();

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ScoutError::transport(&url, source))?;
        let body = decode_latin1(&bytes);
        debug!("{body}");

        if status != 200 {
            error!("listing request to {url} answered with status {status}");
            return Err(ScoutError::fetch(&url, status, body));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_carries_the_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert_eq!(
            HttpClient::listing_url(date),
            "https://www.blp-shop.de/de/eticket_applications/select_timeslot_list/10/2024-06-01/"
        );
    }

    #[test]
    fn latin1_bytes_decode_without_loss() {
        assert_eq!(decode_latin1(b"Stra\xdfe G\xfcltig"), "Straße Gültig");
        assert_eq!(decode_latin1(b"plain ascii"), "plain ascii");
    }

    #[test]
    fn default_config_sets_a_timeout() {
        let config = HttpClientConfig::default();

        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("timeslot-scout/"));
    }
}
