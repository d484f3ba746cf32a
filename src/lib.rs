//! Timeslot Scout - Stadtbad Babelsberg e-ticket availability scraper
//!
//! Scrapes the shop's daily timed-entry listing for a range of dates,
//! extracts typed booking slots from the HTML, and forwards them to the
//! lake booking backend. Any failure alerts an operator over Telegram.

// Module declarations
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export the types the binary and the tests reach for most
pub use application::SlotCollector;
pub use domain::{BookingSlot, PageFetcher};
pub use error::{ScoutError, ScoutResult};
