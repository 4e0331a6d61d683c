use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::analysis::distribution::median_price;
use crate::config::ANALYSIS;
use crate::domain::Listing;
use crate::models::charts::BrandSummary;

/// Brand selector value: the all-brands overview or one brand.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BrandChoice {
    #[default]
    All,
    Brand(String),
}

impl BrandChoice {
    pub fn brand(&self) -> Option<&str> {
        match self {
            BrandChoice::All => None,
            BrandChoice::Brand(name) => Some(name),
        }
    }
}

impl std::fmt::Display for BrandChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BrandChoice::All => write!(f, "{}", ANALYSIS.selection.all_brands_label),
            BrandChoice::Brand(name) => write!(f, "{}", name),
        }
    }
}

/// The `n` most frequent brands with their counts, most frequent first (ties by name).
pub fn top_brands(rows: &[&Listing], n: usize) -> Vec<(String, usize)> {
    rows.iter()
        .map(|l| l.brand_name.as_str())
        .counts()
        .into_iter()
        .sorted_by_key(|(brand, count)| (Reverse(*count), *brand))
        .take(n)
        .map(|(brand, count)| (brand.to_string(), count))
        .collect()
}

/// "ALL" followed by the configured number of top brands.
pub fn brand_options(rows: &[&Listing]) -> Vec<BrandChoice> {
    std::iter::once(BrandChoice::All)
        .chain(
            top_brands(rows, ANALYSIS.selection.top_brand_count)
                .into_iter()
                .map(|(brand, _)| BrandChoice::Brand(brand)),
        )
        .collect()
}

/// Distinct volumes listed for `brand`, in order of first appearance.
pub fn volume_options(rows: &[&Listing], brand: &str) -> Vec<String> {
    rows.iter()
        .filter(|l| l.brand_name == brand)
        .map(|l| l.volume.as_str())
        .unique()
        .map(str::to_string)
        .collect()
}

pub fn select_variant<'a>(rows: &[&'a Listing], brand: &str, volume: &str) -> Vec<&'a Listing> {
    rows.iter()
        .copied()
        .filter(|l| l.is_variant(brand, volume))
        .collect()
}

/// Listing count and median price for each of the top brands.
pub fn market_summary(rows: &[&Listing]) -> Vec<BrandSummary> {
    let prices_by_brand = rows
        .iter()
        .map(|l| (l.brand_name.as_str(), l.price))
        .into_group_map();

    top_brands(rows, ANALYSIS.selection.top_brand_count)
        .into_iter()
        .map(|(brand, listings)| {
            let median = prices_by_brand
                .get(brand.as_str())
                .and_then(|prices| median_price(prices))
                .unwrap_or(0.0);
            BrandSummary {
                brand,
                listings,
                median_price: median,
            }
        })
        .collect()
}
