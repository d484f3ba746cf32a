//! Runtime configuration.
//!
//! Everything arrives through environment variables, read once at startup.
//! The raw [`AppConfig`] keeps the required values optional so the alert
//! channel can still be built when they are missing; [`RunConfig`] is the
//! validated view the pipeline components are constructed from.

use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

use crate::error::{ScoutError, ScoutResult};

/// Booking-shop constants.
pub mod blp_shop {
    /// Listing page for one date; `{}` takes the date as `YYYY-MM-DD`.
    pub const TIMESLOT_LIST_URL: &str =
        "https://www.blp-shop.de/de/eticket_applications/select_timeslot_list/10/{}/";

    /// Backend display name of the facility the listing belongs to.
    pub const VARIATION: &str = "Stadtbad Babelsberg";
}

/// Fallback values for the optional environment variables.
pub mod defaults {
    /// Cluster-internal backend service.
    pub const BACKEND_URL: &str = "http://api:80";

    /// Backend path template; `{}` takes the facility UUID.
    pub const BACKEND_PATH: &str = "lake/{}/booking";

    /// Telegram chat ids receiving failure alerts.
    pub const TELEGRAM_CHATLIST: &str = "139656428";

    /// Number of days to scrape, starting today.
    pub const DAYS_AHEAD: u32 = 1;

    /// Upper bound for `DAYS_AHEAD`; larger values are clamped.
    pub const MAX_DAYS_AHEAD: u32 = 31;

    /// Client-side timeout for every outbound request, in seconds.
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
}

/// Raw environment configuration.
///
/// Field names double as the (lowercased) environment variable names. Every
/// value stays a string at this stage; numeric validation happens when the
/// [`RunConfig`] view is built, so a malformed value still leaves the alert
/// channel constructible.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Facility UUID in the backend (`POTSDAM_UUID`).
    pub potsdam_uuid: Option<String>,

    /// Backend bearer token (`API_KEY`).
    pub api_key: Option<String>,

    /// Backend base URL (`BACKEND_URL`).
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Backend path template (`BACKEND_PATH`).
    #[serde(default = "default_backend_path")]
    pub backend_path: String,

    /// Telegram bot token (`TOKEN`); alerts are skipped without it.
    pub token: Option<String>,

    /// Comma-separated alert chat ids (`TELEGRAM_CHATLIST`).
    #[serde(default = "default_telegram_chatlist")]
    pub telegram_chatlist: String,

    /// Days to scrape starting today (`DAYS_AHEAD`), unparsed.
    #[serde(default = "default_days_ahead")]
    pub days_ahead: String,
}

fn default_backend_url() -> String {
    defaults::BACKEND_URL.to_string()
}

fn default_backend_path() -> String {
    defaults::BACKEND_PATH.to_string()
}

fn default_telegram_chatlist() -> String {
    defaults::TELEGRAM_CHATLIST.to_string()
}

fn default_days_ahead() -> String {
    defaults::DAYS_AHEAD.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            potsdam_uuid: None,
            api_key: None,
            backend_url: default_backend_url(),
            backend_path: default_backend_path(),
            token: None,
            telegram_chatlist: default_telegram_chatlist(),
            days_ahead: default_days_ahead(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// Values are taken verbatim, so this cannot fail on a malformed number;
    /// those surface from [`RunConfig::from_app_config`] instead.
    pub fn from_env() -> ScoutResult<Self> {
        let settings = Config::builder()
            .add_source(Environment::default())
            .build()
            .map_err(|e| ScoutError::config(&format!("could not read environment: {e}")))?;

        settings
            .try_deserialize()
            .map_err(|e| ScoutError::config(&format!("invalid environment value: {e}")))
    }

    /// Chat ids receiving alerts, with empty entries dropped.
    pub fn alert_recipients(&self) -> Vec<String> {
        self.telegram_chatlist
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Bot token, if one is configured and non-empty.
    pub fn alert_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Validated configuration the pipeline runs with.
///
/// Construction fails on the first missing required variable, before any
/// network-facing component exists.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub facility_uuid: String,
    pub api_key: String,
    pub backend_url: String,
    pub backend_path: String,
    pub days_ahead: u32,
}

impl RunConfig {
    pub fn from_app_config(config: &AppConfig) -> ScoutResult<Self> {
        let facility_uuid = match config.potsdam_uuid.as_deref() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => {
                return Err(ScoutError::config("POTSDAM_UUID not defined in environment"));
            }
        };
        let api_key = match config.api_key.as_deref() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => return Err(ScoutError::config("API_KEY not defined in environment")),
        };

        let days_ahead = config.days_ahead.trim().parse::<u32>().map_err(|_| {
            ScoutError::config(&format!(
                "DAYS_AHEAD is not a number of days: '{}'",
                config.days_ahead
            ))
        })?;
        let days_ahead = if days_ahead > defaults::MAX_DAYS_AHEAD {
            warn!(
                "DAYS_AHEAD={days_ahead} is beyond the supported window, clamping to {}",
                defaults::MAX_DAYS_AHEAD
            );
            defaults::MAX_DAYS_AHEAD
        } else {
            days_ahead
        };

        Ok(Self {
            facility_uuid,
            api_key,
            backend_url: config.backend_url.clone(),
            backend_path: config.backend_path.clone(),
            days_ahead,
        })
    }
}
