//! Synthetic listings for unit tests.

use chrono::{DateTime, Utc};

use crate::data::listings::csv_version::parse_sales_date;
use crate::domain::{ConditionGrade, Listing};

/// "YYYY-MM-DD", "YYYY-MM-DD HH:MM:SS" or RFC 3339, as an absolute UTC instant.
pub fn at(text: &str) -> DateTime<Utc> {
    parse_sales_date(text).unwrap().with_timezone(&Utc)
}

pub fn listing(date: &str, brand: &str, volume: &str, grade: ConditionGrade, price: f64) -> Listing {
    Listing {
        sales_date: parse_sales_date(date).unwrap(),
        brand_name: brand.to_string(),
        volume: volume.to_string(),
        item_condition: grade,
        price,
        sim_free_flg: "SIMフリー".to_string(),
        restriction: "○".to_string(),
    }
}

pub fn flagged(grade: ConditionGrade, price: f64, sim: &str, restriction: &str) -> Listing {
    Listing {
        sim_free_flg: sim.to_string(),
        restriction: restriction.to_string(),
        ..listing("2024-03-01", "iPhone 12", "64GB", grade, price)
    }
}

pub fn refs(listings: &[Listing]) -> Vec<&Listing> {
    listings.iter().collect()
}
