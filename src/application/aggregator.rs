//! Drives the scrape pipeline across the configured date range.

use std::sync::Arc;

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::{debug, error, info};

use crate::domain::booking::BookingSlot;
use crate::domain::services::PageFetcher;
use crate::domain::time;
use crate::error::ScoutResult;
use crate::infrastructure::parsing::{Document, RowLocator, SlotExtractor};

/// Collects one booking slot per date, strictly in order.
///
/// Dates are processed one at a time starting at the current local day; the
/// first failing stage aborts the run, so a partial slot list never leaves
/// this type.
pub struct SlotCollector {
    fetcher: Arc<dyn PageFetcher>,
    locator: RowLocator,
    extractor: SlotExtractor,
    days_ahead: u32,
}

impl SlotCollector {
    pub fn new(fetcher: Arc<dyn PageFetcher>, days_ahead: u32) -> ScoutResult<Self> {
        Ok(Self {
            fetcher,
            locator: RowLocator::new()?,
            extractor: SlotExtractor::new()?,
            days_ahead,
        })
    }

    /// Scrape every date of the range.
    ///
    /// The sale-start stamp is computed once here and shared by all slots of
    /// the run.
    pub async fn collect(&self) -> ScoutResult<Vec<BookingSlot>> {
        let today = time::local_today();
        let sale_start = time::sale_start(today);
        info!(
            "collecting {} day(s) of slots starting {today}",
            self.days_ahead
        );

        let mut slots = Vec::with_capacity(self.days_ahead as usize);
        for offset in 0..self.days_ahead {
            let date = today + Days::new(u64::from(offset));

            match self.scrape_date(date, sale_start).await {
                Ok(slot) => {
                    debug!("built slot for {date}: {slot}");
                    slots.push(slot);
                }
                Err(err) => {
                    error!("scrape for {date} failed: {err}");
                    return Err(err);
                }
            }
        }

        info!("collected {} slot(s)", slots.len());
        Ok(slots)
    }

    async fn scrape_date(
        &self,
        date: NaiveDate,
        sale_start: NaiveDateTime,
    ) -> ScoutResult<BookingSlot> {
        let body = self.fetcher.fetch_listing(date).await?;
        let document = Document::parse(&body);
        let row = self.locator.locate(&document)?;
        self.extractor.extract(row, date, sale_start)
    }
}
