use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{ConditionGrade, Listing};
use crate::models::charts::{GradeSeries, PriceSeriesChart, WeeklyMean};
use crate::utils::time_utils::week_ending_sunday;

#[derive(Default)]
struct PriceAccumulator {
    sum: f64,
    count: usize,
}

/// Mean price per (condition, week), one series per condition present.
///
/// Weeks end on Sunday and are labelled by that Sunday. Series are ordered by
/// ascending condition code and a week with no sales for a condition is simply
/// missing from that condition's points.
pub fn weekly_mean_prices(rows: &[&Listing]) -> PriceSeriesChart {
    let mut cells: BTreeMap<ConditionGrade, BTreeMap<NaiveDate, PriceAccumulator>> =
        BTreeMap::new();

    for listing in rows {
        let week = week_ending_sunday(listing.sales_date.date_naive());
        let cell = cells
            .entry(listing.item_condition)
            .or_default()
            .entry(week)
            .or_default();
        cell.sum += listing.price;
        cell.count += 1;
    }

    let series = cells
        .into_iter()
        .map(|(grade, weeks)| GradeSeries {
            grade,
            label: grade.letter().to_string(),
            points: weeks
                .into_iter()
                .map(|(week_ending, acc)| WeeklyMean {
                    week_ending,
                    mean_price: acc.sum / acc.count as f64,
                    listings: acc.count,
                })
                .collect(),
        })
        .collect();

    PriceSeriesChart { series }
}
