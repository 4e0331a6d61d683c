//! CSV export of the listing table.
//!
//! Expected header: `sales_date,brand_name,volume,item_condition,price,sim_free_flg,restriction`.
//! Any malformed record aborts the load with the offending line number.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Deserialize;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::listings::ListingSource;
use crate::domain::{ConditionGrade, Listing, ListingTable};

#[derive(Debug, Deserialize)]
struct CsvRow {
    sales_date: String,
    brand_name: String,
    volume: String,
    item_condition: u8,
    price: f64,
    sim_free_flg: String,
    restriction: String,
}

impl CsvRow {
    fn into_listing(self) -> Result<Listing> {
        Ok(Listing {
            sales_date: parse_sales_date(&self.sales_date)?,
            item_condition: ConditionGrade::try_from(self.item_condition)?,
            brand_name: self.brand_name,
            volume: self.volume,
            price: self.price,
            sim_free_flg: self.sim_free_flg,
            restriction: self.restriction,
        })
    }
}

/// Accepts RFC 3339 (offset kept), `YYYY-MM-DD HH:MM:SS` (UTC) or a bare
/// `YYYY-MM-DD` (UTC midnight).
pub fn parse_sales_date(text: &str) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    bail!("Unrecognised sales_date '{}'", text)
}

/// Parse listings from any CSV reader.
pub fn read_listings<R: Read>(reader: R) -> Result<Vec<Listing>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut listings = Vec::new();
    for (idx, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // +2: records start after the header and lines are 1-based
        let line = idx + 2;
        let row = result.with_context(|| format!("CSV parse error on line {}", line))?;
        let listing = row
            .into_listing()
            .with_context(|| format!("Invalid listing on line {}", line))?;
        listings.push(listing);
    }
    Ok(listings)
}

pub struct CsvVersion {
    pub path: PathBuf,
}

impl ListingSource for CsvVersion {
    fn signature(&self) -> &'static str {
        "CSV Export"
    }

    fn load(&self) -> Result<ListingTable> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!("Reading listings CSV from {:?}...", self.path);
        }
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open CSV: {}", self.path.display()))?;
        let listings = read_listings(file)
            .with_context(|| format!("Failed to read CSV: {}", self.path.display()))?;

        let name = self
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(ListingTable::new(name, listings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};

    const SAMPLE: &str = "\
sales_date,brand_name,volume,item_condition,price,sim_free_flg,restriction
2024-06-01T10:30:00+09:00,iPhone 12,64GB,5,42000,SIMフリー,○
2024-06-02 08:00:00,iPhone 12,64GB,0,15000,SIMロック,×
2024-06-03,Pixel 7,128GB,3,30000,SIMフリー,△
";

    #[test]
    fn test_reads_all_rows() {
        let listings = read_listings(SAMPLE.as_bytes()).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].item_condition, ConditionGrade::S);
        assert_eq!(listings[1].sim_free_flg, "SIMロック");
        assert_eq!(listings[2].volume, "128GB");
        assert_eq!(listings[2].price, 30_000.0);
    }

    #[test]
    fn test_timestamps_keep_their_offset() {
        let listings = read_listings(SAMPLE.as_bytes()).unwrap();
        // Local wall clock is preserved; 10:30 JST is still 01:30 UTC
        assert_eq!(listings[0].sales_date.hour(), 10);
        assert_eq!(listings[0].sales_date.offset().local_minus_utc(), 9 * 3600);
        let utc = listings[0].sales_date.with_timezone(&Utc);
        assert_eq!((utc.hour(), utc.minute()), (1, 30));
        assert_eq!(listings[1].sales_date.hour(), 8);
        assert_eq!(listings[2].sales_date.day(), 3);
    }

    #[test]
    fn test_unknown_condition_reports_line() {
        let bad = "\
sales_date,brand_name,volume,item_condition,price,sim_free_flg,restriction
2024-06-01,iPhone 12,64GB,4,42000,a,b
2024-06-01,iPhone 12,64GB,7,42000,a,b
";
        let err = read_listings(bad.as_bytes()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("line 3"), "unexpected error: {}", message);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(parse_sales_date("yesterday").is_err());
        assert!(parse_sales_date("2024-02-30").is_err());
    }

    #[test]
    fn test_missing_file_fails_source() {
        let source = CsvVersion {
            path: PathBuf::from("definitely/not/here.csv"),
        };
        assert!(source.load().is_err());
    }
}
