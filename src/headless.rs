//! JSON export of the dashboard for scripting, used by `--headless`.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::DashboardEngine;
use crate::models::charts::{BrandSummary, VariantDashboard};
use crate::utils::time_utils::utc_now;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum HeadlessReport {
    Summary(Vec<BrandSummary>),
    Variant(VariantDashboard),
}

/// The market summary when `brand` is `None`, otherwise one variant's dashboard.
/// Without an explicit volume the brand's first listed volume is used.
pub fn build_report(
    engine: &DashboardEngine<'_>,
    brand: Option<&str>,
    volume: Option<&str>,
) -> Result<HeadlessReport> {
    build_report_at(engine, utc_now(), brand, volume)
}

pub fn build_report_at(
    engine: &DashboardEngine<'_>,
    now: DateTime<Utc>,
    brand: Option<&str>,
    volume: Option<&str>,
) -> Result<HeadlessReport> {
    let Some(brand) = brand else {
        return Ok(HeadlessReport::Summary(engine.market_summary_at(now)));
    };

    let volume = match volume {
        Some(volume) => volume.to_string(),
        None => match engine.volume_options_at(now, brand).into_iter().next() {
            Some(volume) => volume,
            None => bail!("Brand '{}' has no listings in the window; pass --volume", brand),
        },
    };
    Ok(HeadlessReport::Variant(engine.dashboard_at(now, brand, &volume)))
}

pub fn report_json(report: &HeadlessReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}
