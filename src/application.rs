//! Application layer module
//!
//! Orchestrates the domain logic: one collector drives the whole
//! fetch-parse-extract loop across the configured date range.

pub mod aggregator;

pub use aggregator::SlotCollector;
