use chrono::{DateTime, Duration, Utc};

use crate::config::ANALYSIS;
use crate::domain::Listing;

/// Earliest sale time still inside the trailing window ending at `now`.
pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(ANALYSIS.window.trailing_days)
}

/// Rows sold at or after `now - trailing_days`, compared as absolute instants.
/// Input order is preserved.
pub fn within_window(listings: &[Listing], now: DateTime<Utc>) -> Vec<&Listing> {
    let start = window_start(now);
    listings
        .iter()
        .filter(|l| l.sales_date.with_timezone(&Utc) >= start)
        .collect()
}
