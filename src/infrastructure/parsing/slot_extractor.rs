//! Turns the located data row into a typed booking slot.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, error};

use super::document::{Node, Query};
use crate::domain::booking::{BookingSlot, UNAVAILABLE_LINK};
use crate::domain::time;
use crate::error::{ScoutError, ScoutResult};

/// Marker the shop prints in the ticket cell once a slot is gone. Matched
/// case-insensitively anywhere in the cell text.
pub const SOLD_OUT_MARKER: &str = "ausverkauft";

/// Format of a time cell once the slot's date is prepended.
const CELL_TIME_FORMAT: &str = "%d.%m.%Y %H:%M Uhr";

const START_LABEL: &str = "Von";
const END_LABEL: &str = "Bis";
const TICKETS_LABEL: &str = "Freie E-Tickets";

/// Extracts one [`BookingSlot`] from the data row of a listing page.
///
/// The row carries three labeled cells (start, end, remaining tickets) and
/// possibly a booking anchor. All three cells and both time values must be
/// present and well formed; availability and the link degrade gracefully.
pub struct SlotExtractor {
    start_cell: Query,
    end_cell: Query,
    tickets_cell: Query,
    cell: Query,
    any_anchor: Query,
    tariff_anchor: Query,
}

impl SlotExtractor {
    pub fn new() -> ScoutResult<Self> {
        Ok(Self {
            start_cell: Query::parse(r#"td[data-title="Von"]"#)?,
            end_cell: Query::parse(r#"td[data-title="Bis"]"#)?,
            tickets_cell: Query::parse(r#"td[data-title="Freie E-Tickets"]"#)?,
            cell: Query::parse("td")?,
            any_anchor: Query::parse("a")?,
            tariff_anchor: Query::parse(r#"a[title="Zur Tarifauswahl"]"#)?,
        })
    }

    /// Build the slot for `date` out of the located data row.
    ///
    /// `sale_start` is computed once per run by the caller and stamped onto
    /// every slot unchanged.
    pub fn extract(
        &self,
        row: Node<'_>,
        date: NaiveDate,
        sale_start: NaiveDateTime,
    ) -> ScoutResult<BookingSlot> {
        let start_cell = row.find_first(&self.start_cell);
        let end_cell = row.find_first(&self.end_cell);
        let tickets_cell = row.find_first(&self.tickets_cell);

        let (Some(start), Some(end), Some(tickets)) = (start_cell, end_cell, tickets_cell) else {
            let missing: Vec<&str> = [
                (START_LABEL, start_cell.is_none()),
                (END_LABEL, end_cell.is_none()),
                (TICKETS_LABEL, tickets_cell.is_none()),
            ]
            .into_iter()
            .filter(|(_, absent)| *absent)
            .map(|(label, _)| label)
            .collect();
            error!("data row is missing labeled cell(s): {}", missing.join(", "));
            return Err(ScoutError::missing_cells(&missing));
        };

        let begin_time = self.cell_time(&start, date, START_LABEL)?;
        let end_time = self.cell_time(&end, date, END_LABEL)?;

        let candidates = self.booking_links(&row);
        let is_available =
            !candidates.is_empty() && !tickets.text().to_lowercase().contains(SOLD_OUT_MARKER);

        let booking_link = match candidates.first() {
            Some(href) if is_available => (*href).to_string(),
            _ => UNAVAILABLE_LINK.to_string(),
        };

        debug!(
            "slot for {date}: available={is_available}, {} link candidate(s)",
            candidates.len()
        );

        Ok(BookingSlot {
            booking_link,
            begin_time,
            end_time,
            sale_start,
            is_available,
        })
    }

    /// Parse a time cell against the slot's date and normalize it to UTC.
    fn cell_time(&self, cell: &Node<'_>, date: NaiveDate, label: &str) -> ScoutResult<NaiveDateTime> {
        let text = cell.text();
        let stamp = format!("{} {}", date.format("%d.%m.%Y"), text);

        let wall = NaiveDateTime::parse_from_str(&stamp, CELL_TIME_FORMAT).map_err(|source| {
            error!("cell '{label}' holds unparseable time text '{text}'");
            ScoutError::time_parse(label, &text, source)
        })?;
        Ok(time::to_naive_utc(wall))
    }

    /// Hrefs of tariff-selection anchors.
    ///
    /// Scanned per cell the way the page lays them out: only cells containing
    /// an anchor at all are considered, and within those only an anchor
    /// carrying the tariff title and a non-empty href counts. An available
    /// slot always points at a real URL.
    fn booking_links<'a>(&self, row: &Node<'a>) -> Vec<&'a str> {
        row.find_all(&self.cell)
            .into_iter()
            .filter(|cell| cell.find_first(&self.any_anchor).is_some())
            .filter_map(|cell| cell.find_first(&self.tariff_anchor))
            .filter_map(|anchor| anchor.attr("href"))
            .filter(|href| !href.is_empty())
            .collect()
    }
}
