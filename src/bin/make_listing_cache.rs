use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

use phone_resale::config::listing_cache_path;
use phone_resale::data::listings::csv_version::read_listings;
use phone_resale::data::listings::serde_version::write_listing_cache;
use phone_resale::domain::ListingTable;

/// Usage: make_listing_cache [CSV_PATH] [CACHE_PATH]
///
/// Defaults to data/smartphone.csv -> data/smartphone.bin.
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = listing_cache_path();
    let source_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| output_path.with_extension("csv"));
    let output_path = args.next().map(PathBuf::from).unwrap_or(output_path);
    build_listing_cache(&source_path, &output_path)
}

fn build_listing_cache(source_path: &Path, output_path: &Path) -> Result<()> {
    let file = File::open(source_path)
        .with_context(|| format!("Failed to open source CSV {:?}", source_path))?;
    let listings = read_listings(file)
        .with_context(|| format!("Failed to parse source CSV {:?}", source_path))?;

    let name = source_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let table = ListingTable::new(name, listings);
    println!("Loaded {} listings from {:?}", table.len(), source_path);

    write_listing_cache(&table, output_path)?;

    println!(
        "✅ Listing cache written to {:?} with {} listings.",
        output_path,
        table.len()
    );
    Ok(())
}
