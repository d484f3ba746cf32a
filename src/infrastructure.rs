//! Infrastructure layer for HTTP, parsing, and external integrations
//!
//! Everything that touches the outside world lives here: the booking-shop
//! fetch, the HTML parsing stages, the backend publish, the Telegram alert
//! channel, plus configuration and logging setup.

pub mod alert; // Telegram failure notifications
pub mod backend; // Booking payload publisher
pub mod config; // Environment configuration and site constants
pub mod http_client; // Outbound HTTP client
pub mod logging; // Logging setup
pub mod parsing; // Listing-page parsing stages

// Re-export commonly used items
pub use alert::TelegramNotifier;
pub use backend::BackendPublisher;
pub use config::{AppConfig, RunConfig, blp_shop};
pub use http_client::{HttpClient, HttpClientConfig};
pub use parsing::{Document, RowLocator, SlotExtractor};
