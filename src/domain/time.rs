//! Wall-clock normalization for the booking shop's timezone.
//!
//! The listing page prints Europe/Berlin wall-clock times with no offset
//! attached, while the backend expects "naive UTC": the same instant
//! expressed in UTC with the offset stripped again. The conversion applies
//! the seasonal CET/CEST rules.

use chrono::{Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Timezone the booking shop publishes its times in.
pub const BOOKING_TZ: Tz = chrono_tz::Europe::Berlin;

/// Convert a Europe/Berlin wall-clock value to naive UTC.
///
/// During the fall-back hour the same wall clock occurs twice; the later
/// (standard time) reading wins. Wall clocks inside the spring-forward gap
/// never occur at all; they are pushed forward an hour and resolved from
/// there, which lands on the instant the clock jumps to.
pub fn to_naive_utc(wall: NaiveDateTime) -> NaiveDateTime {
    match BOOKING_TZ.from_local_datetime(&wall) {
        LocalResult::Single(local) => local.with_timezone(&Utc).naive_utc(),
        LocalResult::Ambiguous(_, latest) => latest.with_timezone(&Utc).naive_utc(),
        LocalResult::None => to_naive_utc(wall + Duration::hours(1)),
    }
}

/// Current calendar date in the booking shop's timezone.
pub fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&BOOKING_TZ).date_naive()
}

/// Sale-start stamp for a run: local midnight of `date`, in naive UTC.
pub fn sale_start(date: NaiveDate) -> NaiveDateTime {
    to_naive_utc(date.and_time(NaiveTime::MIN))
}
