//! Aggregation and selection configuration

use crate::domain::condition::ConditionGrade;

/// Settings for the trailing time window applied before every query
pub struct WindowSettings {
    // Rows older than `now - trailing_days` are dropped
    pub trailing_days: i64,
}

/// Settings for the brand / volume selectors
pub struct SelectionSettings {
    // How many of the most frequent brands are offered next to "ALL"
    pub top_brand_count: usize,
    pub all_brands_label: &'static str,
}

/// Settings for box-plot summaries
pub struct DistributionSettings {
    // Whiskers reach the most extreme observation within this many IQRs of the box
    pub whisker_iqr_factor: f64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub window: WindowSettings,
    pub selection: SelectionSettings,
    pub distribution: DistributionSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    window: WindowSettings { trailing_days: 365 },
    selection: SelectionSettings {
        top_brand_count: 10,
        all_brands_label: "ALL",
    },
    distribution: DistributionSettings {
        whisker_iqr_factor: 1.5,
    },
};

/// Display letter for each condition code, indexed by the code itself (0 = worst).
pub const GRADE_LETTERS: [&str; 6] = ["J", "D", "C", "B", "A", "S"];

/// Order in which condition layers are stacked in the monthly bar chart, bottom first.
/// Follows display-grade rank, so the best condition sits on the axis.
pub const STACK_ORDER: [ConditionGrade; 6] = [
    ConditionGrade::S,
    ConditionGrade::A,
    ConditionGrade::B,
    ConditionGrade::C,
    ConditionGrade::D,
    ConditionGrade::J,
];
