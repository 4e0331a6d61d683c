// Chart models produced by the aggregators
// Pure data, independent of UI/visualization

pub mod charts;

// Re-export key types for convenience
pub use charts::{
    BoxStats, BrandSummary, CategoryBox, DistributionChart, DistributionColumn, GradeSeries,
    MonthlyCountChart, PriceSeriesChart, StackedLayer, VariantDashboard, WeeklyMean,
};
