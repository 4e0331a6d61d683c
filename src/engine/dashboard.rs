use chrono::{DateTime, Utc};

use crate::analysis::{
    brand_options, market_summary, monthly_listing_counts, price_distribution, select_variant,
    volume_options, weekly_mean_prices, within_window,
};
use crate::analysis::selection::BrandChoice;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Listing, ListingTable};
use crate::models::charts::{
    BrandSummary, DistributionChart, DistributionColumn, MonthlyCountChart, PriceSeriesChart,
    VariantDashboard,
};
use crate::utils::time_utils::utc_now;

/// Read-only query surface over the listing table.
///
/// Every query re-applies the trailing window against the current time, then
/// the brand/volume selection, then one aggregator. The `_at` variants take an
/// explicit clock. A selection with no rows yields empty charts, never an error.
#[derive(Clone, Copy)]
pub struct DashboardEngine<'a> {
    table: &'a ListingTable,
}

impl<'a> DashboardEngine<'a> {
    pub fn new(table: &'a ListingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a ListingTable {
        self.table
    }

    fn windowed(&self, now: DateTime<Utc>) -> Vec<&'a Listing> {
        within_window(&self.table.listings, now)
    }

    fn variant_rows(&self, now: DateTime<Utc>, brand: &str, volume: &str) -> Vec<&'a Listing> {
        let windowed = self.windowed(now);
        let rows = select_variant(&windowed, brand, volume);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_aggregation_stats {
            log::info!(
                "[{} / {}] {} rows in table, {} in window, {} selected",
                brand,
                volume,
                self.table.len(),
                windowed.len(),
                rows.len()
            );
        }
        rows
    }

    // --- SELECTORS ---

    pub fn brand_options(&self) -> Vec<BrandChoice> {
        self.brand_options_at(utc_now())
    }

    pub fn brand_options_at(&self, now: DateTime<Utc>) -> Vec<BrandChoice> {
        brand_options(&self.windowed(now))
    }

    pub fn volume_options(&self, brand: &str) -> Vec<String> {
        self.volume_options_at(utc_now(), brand)
    }

    pub fn volume_options_at(&self, now: DateTime<Utc>, brand: &str) -> Vec<String> {
        volume_options(&self.windowed(now), brand)
    }

    // --- CHARTS ---

    pub fn filtered_time_series(&self, brand: &str, volume: &str) -> PriceSeriesChart {
        self.filtered_time_series_at(utc_now(), brand, volume)
    }

    pub fn filtered_time_series_at(
        &self,
        now: DateTime<Utc>,
        brand: &str,
        volume: &str,
    ) -> PriceSeriesChart {
        weekly_mean_prices(&self.variant_rows(now, brand, volume))
    }

    pub fn filtered_monthly_counts(&self, brand: &str, volume: &str) -> MonthlyCountChart {
        self.filtered_monthly_counts_at(utc_now(), brand, volume)
    }

    pub fn filtered_monthly_counts_at(
        &self,
        now: DateTime<Utc>,
        brand: &str,
        volume: &str,
    ) -> MonthlyCountChart {
        monthly_listing_counts(&self.variant_rows(now, brand, volume))
    }

    pub fn price_distribution(
        &self,
        brand: &str,
        volume: &str,
        column: DistributionColumn,
    ) -> DistributionChart {
        self.price_distribution_at(utc_now(), brand, volume, column)
    }

    pub fn price_distribution_at(
        &self,
        now: DateTime<Utc>,
        brand: &str,
        volume: &str,
        column: DistributionColumn,
    ) -> DistributionChart {
        price_distribution(&self.variant_rows(now, brand, volume), column)
    }

    /// All four charts for one selection, from a single pass of filtering.
    pub fn dashboard(&self, brand: &str, volume: &str) -> VariantDashboard {
        self.dashboard_at(utc_now(), brand, volume)
    }

    pub fn dashboard_at(&self, now: DateTime<Utc>, brand: &str, volume: &str) -> VariantDashboard {
        let rows = self.variant_rows(now, brand, volume);
        VariantDashboard {
            brand: brand.to_string(),
            volume: volume.to_string(),
            listings: rows.len(),
            price_series: weekly_mean_prices(&rows),
            monthly_counts: monthly_listing_counts(&rows),
            sim_lock: price_distribution(&rows, DistributionColumn::SimLock),
            network_restriction: price_distribution(&rows, DistributionColumn::NetworkRestriction),
        }
    }

    /// Per-brand overview shown for the "ALL" selection.
    pub fn market_summary(&self) -> Vec<BrandSummary> {
        self.market_summary_at(utc_now())
    }

    pub fn market_summary_at(&self, now: DateTime<Utc>) -> Vec<BrandSummary> {
        market_summary(&self.windowed(now))
    }
}
