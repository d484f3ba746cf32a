//! Publishes the aggregated slots to the lake booking backend.

use serde::Serialize;
use tracing::{debug, error, info};

use super::config::{RunConfig, blp_shop};
use super::http_client::HttpClient;
use crate::domain::booking::BookingSlot;
use crate::error::{ScoutError, ScoutResult};

/// Wire envelope the backend expects around the slots.
#[derive(Debug, Serialize)]
struct BookingPayload<'a> {
    variation: &'a str,
    events: &'a [BookingSlot],
}

/// Submits one run's slots to the backend service.
pub struct BackendPublisher {
    http: HttpClient,
    endpoint: String,
    api_key: String,
}

impl BackendPublisher {
    pub fn new(http: HttpClient, config: &RunConfig) -> Self {
        Self {
            endpoint: Self::endpoint_for(config),
            api_key: config.api_key.clone(),
            http,
        }
    }

    /// Fully-resolved endpoint: base URL joined with the path template, the
    /// `{}` placeholder replaced by the facility UUID.
    fn endpoint_for(config: &RunConfig) -> String {
        let path = config.backend_path.replace("{}", &config.facility_uuid);
        format!("{}/{}", config.backend_url.trim_end_matches('/'), path)
    }

    /// PUT the slots, bearer-authenticated.
    ///
    /// A connection-level failure and a rejecting answer are distinct errors;
    /// only a 2xx status counts as accepted. An empty slot list is published
    /// as an empty `events` array.
    pub async fn publish(&self, slots: &[BookingSlot]) -> ScoutResult<()> {
        let payload = BookingPayload {
            variation: blp_shop::VARIATION,
            events: slots,
        };
        info!("publishing {} slot(s) to {}", slots.len(), self.endpoint);

        let response = self
            .http
            .inner()
            .put(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|source| {
                error!("error while connecting to backend ({})", self.endpoint);
                ScoutError::backend_unreachable(&self.endpoint, source)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ScoutError::backend_unreachable(&self.endpoint, source))?;
        debug!("success: {} | content: {body}", status.is_success());

        if !status.is_success() {
            error!(
                "backend rejected booking payload with status {}: {body}",
                status.as_u16()
            );
            return Err(ScoutError::backend_rejected(
                &self.endpoint,
                status.as_u16(),
                body,
            ));
        }
        Ok(())
    }
}
