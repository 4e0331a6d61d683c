use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::config::STACK_ORDER;
use crate::domain::{ConditionGrade, Listing};
use crate::models::charts::{MonthlyCountChart, StackedLayer};
use crate::utils::time_utils::{month_range, month_start};

/// Listing counts per (condition, calendar month), ready for a stacked bar chart.
///
/// Each condition covers every month from its own first to its own last sale;
/// the month axis is the union of those spans, so a quiet month inside a span
/// is zero while a month no condition spans is left out. Months are bucketed
/// on the sale's local date. Layers appear in `STACK_ORDER` and each layer's
/// bottom is the sum of the layers drawn before it.
pub fn monthly_listing_counts(rows: &[&Listing]) -> MonthlyCountChart {
    let mut counts: BTreeMap<ConditionGrade, BTreeMap<NaiveDate, u32>> = BTreeMap::new();
    for listing in rows {
        let month = month_start(listing.sales_date.date_naive());
        *counts
            .entry(listing.item_condition)
            .or_default()
            .entry(month)
            .or_default() += 1;
    }

    let months: Vec<NaiveDate> = counts
        .values()
        .filter_map(|per_month| {
            let first = per_month.keys().next()?;
            let last = per_month.keys().next_back()?;
            Some(month_range(*first, *last))
        })
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if months.is_empty() {
        return MonthlyCountChart::default();
    }

    let mut running = vec![0u32; months.len()];
    let mut layers = Vec::new();
    for grade in STACK_ORDER {
        let Some(per_month) = counts.get(&grade) else {
            continue;
        };
        let layer_counts: Vec<u32> = months
            .iter()
            .map(|m| per_month.get(m).copied().unwrap_or(0))
            .collect();
        let bottoms = running.clone();
        for (total, count) in running.iter_mut().zip(&layer_counts) {
            *total += count;
        }
        layers.push(StackedLayer {
            grade,
            label: grade.letter().to_string(),
            counts: layer_counts,
            bottoms,
        });
    }

    MonthlyCountChart { months, layers }
}
