//! End-to-end pipeline checks against canned listing pages.
//!
//! A fake page source stands in for the booking shop; everything from the
//! document parse to the serialized payload runs for real.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use timeslot_scout::application::SlotCollector;
use timeslot_scout::domain::UNAVAILABLE_LINK;
use timeslot_scout::domain::services::PageFetcher;
use timeslot_scout::domain::time;
use timeslot_scout::error::{ScoutError, ScoutResult};

/// Serves canned listing pages by date; unknown dates answer 404.
struct CannedPages {
    pages: HashMap<NaiveDate, String>,
}

#[async_trait]
impl PageFetcher for CannedPages {
    async fn fetch_listing(&self, date: NaiveDate) -> ScoutResult<String> {
        match self.pages.get(&date) {
            Some(page) => Ok(page.clone()),
            None => Err(ScoutError::fetch(
                &format!("https://shop.test/{date}"),
                404,
                String::new(),
            )),
        }
    }
}

fn listing_page(tickets: &str, anchor: bool) -> String {
    let link = if anchor {
        r#"<a title="Zur Tarifauswahl" href="https://shop.test/tariff/7">Buchen</a>"#
    } else {
        ""
    };
    format!(
        "<html><body>\
           <h1>E-Tickets</h1>\
           <table>\
             <tr><th>Von</th><th>Bis</th><th>Freie E-Tickets</th><th></th></tr>\
             <tr>\
               <td data-title=\"Von\">10:30 Uhr</td>\
               <td data-title=\"Bis\">12:00 Uhr</td>\
               <td data-title=\"Freie E-Tickets\">{tickets}</td>\
               <td>{link}</td>\
             </tr>\
           </table>\
         </body></html>"
    )
}

fn utc_wall(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    time::to_naive_utc(date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap()))
}

#[tokio::test]
async fn a_range_of_good_days_produces_one_slot_each() {
    let today = time::local_today();
    let mut pages = HashMap::new();
    pages.insert(today, listing_page("12 frei", true));
    pages.insert(today + Days::new(1), listing_page("3 frei", true));
    pages.insert(today + Days::new(2), listing_page("ausverkauft", true));

    let collector = SlotCollector::new(Arc::new(CannedPages { pages }), 3).unwrap();
    let slots = collector.collect().await.unwrap();

    assert_eq!(slots.len(), 3);

    assert!(slots[0].is_available);
    assert_eq!(slots[0].booking_link, "https://shop.test/tariff/7");
    assert_eq!(slots[0].begin_time, utc_wall(today, 10, 30));
    assert_eq!(slots[0].end_time, utc_wall(today, 12, 0));

    assert!(slots[1].is_available);
    assert_eq!(slots[1].begin_time, utc_wall(today + Days::new(1), 10, 30));

    // Sold out: sentinel link, unavailable, times still extracted.
    assert!(!slots[2].is_available);
    assert_eq!(slots[2].booking_link, UNAVAILABLE_LINK);
    assert_eq!(slots[2].begin_time, utc_wall(today + Days::new(2), 10, 30));
}

#[tokio::test]
async fn one_bad_day_fails_the_whole_run() {
    let today = time::local_today();
    let mut pages = HashMap::new();
    pages.insert(today, listing_page("12 frei", true));
    // today + 1 is deliberately absent and answers 404.
    pages.insert(today + Days::new(2), listing_page("12 frei", true));

    let collector = SlotCollector::new(Arc::new(CannedPages { pages }), 3).unwrap();
    let err = collector.collect().await.unwrap_err();

    assert!(matches!(err, ScoutError::Fetch { status: 404, .. }));
}

#[tokio::test]
async fn linkless_days_are_reported_unavailable() {
    let today = time::local_today();
    let mut pages = HashMap::new();
    pages.insert(today, listing_page("5 frei", false));

    let collector = SlotCollector::new(Arc::new(CannedPages { pages }), 1).unwrap();
    let slots = collector.collect().await.unwrap();

    assert!(!slots[0].is_available);
    assert_eq!(slots[0].booking_link, UNAVAILABLE_LINK);
}

#[tokio::test]
async fn collected_slots_serialize_for_the_backend() {
    let today = time::local_today();
    let mut pages = HashMap::new();
    pages.insert(today, listing_page("12 frei", true));

    let collector = SlotCollector::new(Arc::new(CannedPages { pages }), 1).unwrap();
    let slots = collector.collect().await.unwrap();

    let value = serde_json::to_value(&slots[0]).unwrap();
    let begin = value["begin_time"].as_str().unwrap();

    assert!(begin.ends_with('Z'));
    assert_eq!(
        begin,
        format!("{}Z", slots[0].begin_time.format("%Y-%m-%dT%H:%M:%S"))
    );
    assert_eq!(
        value["sale_start"],
        format!(
            "{}Z",
            time::sale_start(today).format("%Y-%m-%dT%H:%M:%S")
        )
    );
    assert_eq!(value["is_available"], true);
}
