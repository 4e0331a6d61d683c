//! Chart-ready outputs of the aggregators.
//!
//! These are plain data: the UI draws them, the headless mode prints them as JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ConditionGrade, Listing};

// ============================================================================
// Weekly mean price per condition
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeeklyMean {
    /// Sunday closing the week
    pub week_ending: NaiveDate,
    pub mean_price: f64,
    pub listings: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradeSeries {
    pub grade: ConditionGrade,
    pub label: String,
    pub points: Vec<WeeklyMean>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PriceSeriesChart {
    pub series: Vec<GradeSeries>,
}

impl PriceSeriesChart {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_for(&self, grade: ConditionGrade) -> Option<&GradeSeries> {
        self.series.iter().find(|s| s.grade == grade)
    }
}

// ============================================================================
// Monthly listing counts, stacked by condition
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StackedLayer {
    pub grade: ConditionGrade,
    pub label: String,
    /// One count per month of `MonthlyCountChart::months`
    pub counts: Vec<u32>,
    /// Cumulative count of all earlier layers, per month
    pub bottoms: Vec<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MonthlyCountChart {
    /// First day of each month, contiguous and ascending
    pub months: Vec<NaiveDate>,
    /// Bottom layer first
    pub layers: Vec<StackedLayer>,
}

impl MonthlyCountChart {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn month_labels(&self) -> Vec<String> {
        self.months
            .iter()
            .map(|m| crate::utils::time_utils::format_month(*m))
            .collect()
    }

    /// Height of the full stack for each month.
    pub fn totals(&self) -> Vec<u32> {
        match self.layers.last() {
            Some(top) => top
                .bottoms
                .iter()
                .zip(&top.counts)
                .map(|(bottom, count)| bottom + count)
                .collect(),
            None => vec![0; self.months.len()],
        }
    }

    pub fn layer_for(&self, grade: ConditionGrade) -> Option<&StackedLayer> {
        self.layers.iter().find(|l| l.grade == grade)
    }
}

// ============================================================================
// Price distribution by a categorical column
// ============================================================================

/// Categorical columns a price distribution can be grouped by.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::Display)]
pub enum DistributionColumn {
    #[strum(to_string = "SIM lock")]
    SimLock,
    #[strum(to_string = "Network restriction")]
    NetworkRestriction,
}

impl DistributionColumn {
    pub fn value_of<'a>(&self, listing: &'a Listing) -> &'a str {
        match self {
            DistributionColumn::SimLock => &listing.sim_free_flg,
            DistributionColumn::NetworkRestriction => &listing.restriction,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub median: f64,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Observations beyond the whiskers. They are counted, never drawn.
    pub suppressed_outliers: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryBox {
    pub category: String,
    pub stats: BoxStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DistributionChart {
    pub column: DistributionColumn,
    /// Sorted by category
    pub boxes: Vec<CategoryBox>,
}

impl DistributionChart {
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

// ============================================================================
// Whole-page bundles
// ============================================================================

/// Everything shown for one brand + volume selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VariantDashboard {
    pub brand: String,
    pub volume: String,
    pub listings: usize,
    pub price_series: PriceSeriesChart,
    pub monthly_counts: MonthlyCountChart,
    pub sim_lock: DistributionChart,
    pub network_restriction: DistributionChart,
}

impl VariantDashboard {
    pub fn is_empty(&self) -> bool {
        self.listings == 0
    }
}

/// One row of the all-brands overview.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BrandSummary {
    pub brand: String,
    pub listings: usize,
    pub median_price: f64,
}
