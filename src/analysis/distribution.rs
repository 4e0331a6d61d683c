use std::collections::BTreeMap;

use itertools::Itertools;
use statrs::statistics::{Data, OrderStatistics};

use crate::config::ANALYSIS;
use crate::domain::Listing;
use crate::models::charts::{BoxStats, CategoryBox, DistributionChart, DistributionColumn};

/// Linear interpolation between closest ranks: `position = p * (n - 1)`.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let position = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower_index = position.floor() as usize;
    let upper_index = position.ceil() as usize;

    if lower_index == upper_index {
        sorted[lower_index]
    } else {
        let weight = position - lower_index as f64;
        sorted[lower_index] + (sorted[upper_index] - sorted[lower_index]) * weight
    }
}

/// Box-plot summary of `prices`, or `None` when there is nothing to summarise.
///
/// Quartiles interpolate linearly between closest ranks. Whiskers stop at the
/// most extreme observation within `whisker_iqr_factor` IQRs of the box;
/// anything beyond is only counted.
pub fn box_stats(prices: &[f64]) -> Option<BoxStats> {
    if prices.is_empty() {
        return None;
    }
    let mut data = Data::new(prices.to_vec());
    let median = data.median();
    let sorted: Vec<f64> = prices.iter().copied().sorted_by(f64::total_cmp).collect();
    let lower_quartile = percentile(&sorted, 0.25);
    let upper_quartile = percentile(&sorted, 0.75);

    let reach = ANALYSIS.distribution.whisker_iqr_factor * (upper_quartile - lower_quartile);
    let low_fence = lower_quartile - reach;
    let high_fence = upper_quartile + reach;

    let mut lower_whisker = f64::INFINITY;
    let mut upper_whisker = f64::NEG_INFINITY;
    let mut suppressed_outliers = 0;
    for &price in prices {
        if price < low_fence || price > high_fence {
            suppressed_outliers += 1;
        } else {
            lower_whisker = lower_whisker.min(price);
            upper_whisker = upper_whisker.max(price);
        }
    }

    Some(BoxStats {
        count: prices.len(),
        median,
        lower_quartile,
        upper_quartile,
        lower_whisker,
        upper_whisker,
        suppressed_outliers,
    })
}

pub fn median_price(prices: &[f64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }
    Some(Data::new(prices.to_vec()).median())
}

/// Price distribution grouped by the distinct values of `column`, categories sorted.
pub fn price_distribution(rows: &[&Listing], column: DistributionColumn) -> DistributionChart {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for listing in rows {
        groups
            .entry(column.value_of(listing))
            .or_default()
            .push(listing.price);
    }

    let boxes = groups
        .into_iter()
        .filter_map(|(category, prices)| {
            box_stats(&prices).map(|stats| CategoryBox {
                category: category.to_string(),
                stats,
            })
        })
        .collect();

    DistributionChart { column, boxes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConditionGrade;
    use crate::test_support::{flagged, refs};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_quartiles_interpolate_between_ranks() {
        let stats = box_stats(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((stats.lower_quartile - 1.75).abs() < EPS, "q1 = {}", stats.lower_quartile);
        assert!((stats.upper_quartile - 3.25).abs() < EPS, "q3 = {}", stats.upper_quartile);
        assert!((stats.median - 2.5).abs() < EPS);

        let sample = [7.0, 1.0, 9.0, 3.0, 5.0, 2.0, 8.0, 4.0, 6.0];
        let stats = box_stats(&sample).unwrap();
        assert!((stats.lower_quartile - 3.0).abs() < EPS);
        assert!((stats.upper_quartile - 7.0).abs() < EPS);
        assert_eq!(stats.count, 9);

        // The median agrees with statrs
        let mut reference = Data::new(sample.to_vec());
        assert!((stats.median - reference.median()).abs() < EPS);
    }

    #[test]
    fn test_percentile_edges() {
        assert_eq!(percentile(&[], 0.5), 0.0);
        assert_eq!(percentile(&[5.0], 0.25), 5.0);
        assert_eq!(percentile(&[1.0, 2.0, 3.0], 0.0), 1.0);
        assert_eq!(percentile(&[1.0, 2.0, 3.0], 1.0), 3.0);
    }

    #[test]
    fn test_whiskers_exclude_outliers() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
        let stats = box_stats(&sample).unwrap();
        assert_eq!(stats.lower_whisker, 1.0);
        assert_eq!(stats.upper_whisker, 8.0);
        assert_eq!(stats.suppressed_outliers, 1);
    }

    #[test]
    fn test_single_value_box_collapses() {
        let stats = box_stats(&[42.0]).unwrap();
        assert_eq!(
            (stats.lower_whisker, stats.lower_quartile, stats.median, stats.upper_quartile, stats.upper_whisker),
            (42.0, 42.0, 42.0, 42.0, 42.0)
        );
        assert_eq!(stats.suppressed_outliers, 0);
        assert!(box_stats(&[]).is_none());
    }

    #[test]
    fn test_grouping_by_column() {
        let listings = vec![
            flagged(ConditionGrade::A, 300.0, "SIMロック", "○"),
            flagged(ConditionGrade::A, 100.0, "SIMフリー", "○"),
            flagged(ConditionGrade::B, 200.0, "SIMフリー", "×"),
            flagged(ConditionGrade::S, 500.0, "SIMロック", "△"),
        ];
        let rows = refs(&listings);

        let sim = price_distribution(&rows, DistributionColumn::SimLock);
        let categories: Vec<&str> = sim.boxes.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(categories, vec!["SIMフリー", "SIMロック"]);
        assert_eq!(sim.boxes[0].stats.count, 2);
        assert_eq!(sim.boxes[0].stats.median, 150.0);
        assert_eq!(sim.boxes[1].stats.median, 400.0);

        let restriction = price_distribution(&rows, DistributionColumn::NetworkRestriction);
        assert_eq!(restriction.column, DistributionColumn::NetworkRestriction);
        assert_eq!(restriction.boxes.len(), 3);
        let total: usize = restriction.boxes.iter().map(|b| b.stats.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_empty_input_and_idempotence() {
        assert!(price_distribution(&[], DistributionColumn::SimLock).is_empty());

        let listings = vec![
            flagged(ConditionGrade::A, 300.0, "SIMロック", "○"),
            flagged(ConditionGrade::A, 100.0, "SIMフリー", "○"),
        ];
        let rows = refs(&listings);
        assert_eq!(
            price_distribution(&rows, DistributionColumn::SimLock),
            price_distribution(&rows, DistributionColumn::SimLock)
        );
    }

    #[test]
    fn test_median_price() {
        assert_eq!(median_price(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median_price(&[]), None);
    }
}
