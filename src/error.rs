//! Pipeline-wide error types.
//!
//! Every stage of the scrape-and-publish pipeline reports its failures as a
//! [`ScoutError`], so a run can stop at the first problem and surface one
//! human-readable message to the operator alert.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("{message}")]
    Config { message: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not retrieve listing page {url} (status {status})")]
    Fetch {
        url: String,
        status: u16,
        body: String,
    },

    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no table found in listing page")]
    TableNotFound,

    #[error("listing table has {found} row(s), expected at least 2")]
    InsufficientRows { found: usize },

    #[error("no row with data cells found in listing table")]
    NoDataRow,

    #[error("data row is missing required cell(s): {}", .labels.join(", "))]
    MissingCells { labels: Vec<String> },

    #[error("could not parse {label} time '{text}': {source}")]
    TimeParse {
        label: String,
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("error while connecting to backend ({url}): {source}")]
    BackendUnreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend rejected payload ({url}, status {status})")]
    BackendRejected {
        url: String,
        status: u16,
        body: String,
    },
}

impl ScoutError {
    /// Create a configuration error from a plain message
    pub fn config(message: &str) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a transport error for a failed outbound request
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// Create a fetch error for a non-200 listing response
    pub fn fetch(url: &str, status: u16, body: String) -> Self {
        Self::Fetch {
            url: url.to_string(),
            status,
            body,
        }
    }

    /// Create an error for a selector that failed to compile
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an extraction error naming every absent cell label
    pub fn missing_cells(labels: &[&str]) -> Self {
        Self::MissingCells {
            labels: labels.iter().map(|label| (*label).to_string()).collect(),
        }
    }

    /// Create a time parse error for one labeled cell
    pub fn time_parse(label: &str, text: &str, source: chrono::ParseError) -> Self {
        Self::TimeParse {
            label: label.to_string(),
            text: text.to_string(),
            source,
        }
    }

    /// Create a publish error for a backend that could not be reached at all
    pub fn backend_unreachable(url: &str, source: reqwest::Error) -> Self {
        Self::BackendUnreachable {
            url: url.to_string(),
            source,
        }
    }

    /// Create a publish error for a backend that answered with a non-success status
    pub fn backend_rejected(url: &str, status: u16, body: String) -> Self {
        Self::BackendRejected {
            url: url.to_string(),
            status,
            body,
        }
    }
}

pub type ScoutResult<T> = Result<T, ScoutError>;
