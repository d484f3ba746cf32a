//! Domain module - core entities and service seams
//!
//! Everything the pipeline knows about a reservable slot lives here, plus
//! the trait through which raw listing pages arrive and the wall-clock
//! normalization rules for the shop's timezone.

pub mod booking;
pub mod services;
pub mod time;

// Re-export commonly used items for convenience
pub use booking::{BookingSlot, UNAVAILABLE_LINK};
pub use services::PageFetcher;
