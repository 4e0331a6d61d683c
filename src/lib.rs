#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod headless;
pub mod models;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use analysis::BrandChoice;
pub use data::{CacheFile, load_listing_data};
pub use domain::{ConditionGrade, Listing, ListingTable};
pub use engine::DashboardEngine;
pub use models::{DistributionChart, MonthlyCountChart, PriceSeriesChart, VariantDashboard};
pub use ui::DashboardApp;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Listing cache to load (a CSV with the same stem is tried if it fails)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Print the dashboard as JSON instead of opening a window
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Brand to report on in headless mode (omit for the market summary)
    #[arg(long, requires = "headless")]
    pub brand: Option<String>,

    /// Storage volume to report on in headless mode (defaults to the brand's first)
    #[arg(long, requires = "brand")]
    pub volume: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    table: &'static ListingTable,
) -> Box<dyn eframe::App> {
    let app = ui::DashboardApp::new(cc, table);
    Box::new(app)
}
