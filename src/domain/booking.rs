//! Booking slot entity and its wire representation.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Placeholder link for slots that cannot be booked.
pub const UNAVAILABLE_LINK: &str = "https://not.available";

/// One reservable time window for the facility on a single date.
///
/// The timestamps are naive UTC: the wall clock read from the listing page is
/// converted out of Europe/Berlin and the offset dropped again. `sale_start`
/// is shared by every slot of a run and marks local midnight of the day the
/// run happened.
///
/// Field order matters: the backend receives the fields in exactly this
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSlot {
    pub booking_link: String,
    #[serde(serialize_with = "serialize_naive_utc")]
    pub begin_time: NaiveDateTime,
    #[serde(serialize_with = "serialize_naive_utc")]
    pub end_time: NaiveDateTime,
    #[serde(serialize_with = "serialize_naive_utc")]
    pub sale_start: NaiveDateTime,
    pub is_available: bool,
}

impl BookingSlot {
    /// True while the slot points at a real booking URL instead of the
    /// [`UNAVAILABLE_LINK`] placeholder.
    pub fn has_real_link(&self) -> bool {
        self.booking_link != UNAVAILABLE_LINK
    }
}

impl std::fmt::Display for BookingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "is_available={} ({})",
            self.is_available, self.booking_link
        )
    }
}

/// Serialize a naive UTC timestamp as `2024-06-01T07:00:00Z`.
///
/// The trailing `Z` is appended by hand because the value itself carries no
/// offset; the backend stores the string verbatim.
fn serialize_naive_utc<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}Z", value.format("%Y-%m-%dT%H:%M:%S")))
}
