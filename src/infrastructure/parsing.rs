//! HTML parsing infrastructure.
//!
//! The listing page arrives as loosely structured markup. This module keeps
//! the parsing library behind a small document interface and builds the two
//! extraction stages on top of it: locating the data row and turning that
//! row into a typed booking slot.

pub mod document;
pub mod row_locator;
pub mod slot_extractor;

// Re-export public types
pub use document::{Document, Node, Query};
pub use row_locator::RowLocator;
pub use slot_extractor::SlotExtractor;
