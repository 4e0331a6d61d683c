use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::condition::ConditionGrade;

/// One observed secondhand sale listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    /// Sale time in the offset it was recorded with. Buckets use this local date.
    pub sales_date: DateTime<FixedOffset>,
    pub brand_name: String,
    /// Storage variant as listed, e.g. "64GB"
    pub volume: String,
    pub item_condition: ConditionGrade,
    pub price: f64,
    pub sim_free_flg: String,
    pub restriction: String,
}

impl Listing {
    pub fn is_variant(&self, brand: &str, volume: &str) -> bool {
        self.brand_name == brand && self.volume == volume
    }
}

/// Immutable, ordered collection of listings. Loaded once, re-filtered per query.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ListingTable {
    pub name: String, // Metadata e.g. "Fleamarket smartphone sales"
    pub listings: Vec<Listing>,
}

impl ListingTable {
    pub fn new(name: impl Into<String>, listings: Vec<Listing>) -> Self {
        Self {
            name: name.into(),
            listings,
        }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
