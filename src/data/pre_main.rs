// Code to run in main before egui starts up

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::Cli;
use crate::config::listing_cache_path;
use crate::data::dataset;
use crate::data::listings::csv_version::CsvVersion;
use crate::data::listings::serde_version::SerdeVersion;
use crate::data::listings::{ListingSource, load_first_available};
use crate::domain::ListingTable;

/// Sources to try for `cache_path`: the bincode cache first, then a CSV export with the same stem.
pub fn default_sources(cache_path: &Path) -> Vec<Box<dyn ListingSource>> {
    vec![
        Box::new(SerdeVersion {
            path: cache_path.to_path_buf(),
        }),
        Box::new(CsvVersion {
            path: cache_path.with_extension("csv"),
        }),
    ]
}

/// Load the listing table for this process. Runs before the GUI starts, so any
/// failure here is fatal to the caller.
pub fn load_listing_data(args: &Cli) -> Result<&'static ListingTable> {
    let cache_path: PathBuf = args.data.clone().unwrap_or_else(listing_cache_path);

    dataset::load_once(|| {
        let sources = default_sources(&cache_path);
        let (table, signature) = load_first_available(&sources)
            .with_context(|| format!("No usable listing data at {}", cache_path.display()))?;

        log::info!(
            "Loaded {} listings from '{}' using: {}.",
            table.len(),
            table.name,
            signature
        );

        Ok(table)
    })
}
