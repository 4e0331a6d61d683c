// Filters and aggregators over the listing table.
// Every function here is pure: same rows in, same chart out.
pub mod distribution;
pub mod monthly_counts;
pub mod price_series;
pub mod selection;
pub mod window;

// Re-export commonly used functions
pub use distribution::{box_stats, price_distribution};
pub use monthly_counts::monthly_listing_counts;
pub use price_series::weekly_mean_prices;
pub use selection::{BrandChoice, brand_options, market_summary, select_variant, volume_options};
pub use window::within_window;
