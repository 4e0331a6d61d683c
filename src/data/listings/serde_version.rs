#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::PERSISTENCE;
use crate::data::listings::{ListingSource, cache_file::CacheFile};
use crate::domain::ListingTable;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Reads the bincode listing cache and checks that its layout version is current.
pub fn load_checked_cache(path: &Path, version_required: f64) -> Result<CacheFile> {
    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!("Reading listing cache from {:?}...", path);
    }
    let cache = CacheFile::load_from_path(path)?;

    if cache.version != version_required {
        bail!(
            "Cache version mismatch: file v{} vs required v{}",
            cache.version,
            version_required
        );
    }
    Ok(cache)
}

/// Write a listing table to the binary cache
pub fn write_listing_cache(table: &ListingTable, path: &Path) -> Result<()> {
    #[cfg(debug_assertions)]
    let start_time = DEBUG_FLAGS.print_serde.then(|| {
        log::info!("Writing cache to disk: {:?}...", path);
        std::time::Instant::now()
    });

    let cache = CacheFile::new(table.clone(), PERSISTENCE.listings.version);
    cache.save_to_path(path)?;

    #[cfg(debug_assertions)]
    if let Some(start) = start_time {
        log::info!(
            "✅ Cache written: {} listings in {:.2}s",
            table.len(),
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}

pub struct SerdeVersion {
    pub path: PathBuf,
}

impl ListingSource for SerdeVersion {
    fn signature(&self) -> &'static str {
        "Local Cache"
    }

    fn load(&self) -> Result<ListingTable> {
        let cache = load_checked_cache(&self.path, PERSISTENCE.listings.version)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!(
                "✅ Cache loaded: {} listings (written {})",
                cache.data.len(),
                crate::utils::time_utils::epoch_ms_to_utc(cache.created_at_ms)
            );
        }
        Ok(cache.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConditionGrade;
    use crate::test_support::listing;

    #[test]
    fn test_written_cache_loads_through_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smartphone.bin");
        let table = ListingTable::new(
            "written",
            vec![listing("2024-05-01", "Pixel 7", "128GB", ConditionGrade::A, 31_000.0)],
        );
        write_listing_cache(&table, &path).unwrap();

        let source = SerdeVersion { path };
        let loaded = source.load().unwrap();
        assert_eq!(loaded.listings, table.listings);
        assert_eq!(source.signature(), "Local Cache");
    }

    #[test]
    fn test_stale_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.bin");
        CacheFile::new(ListingTable::default(), PERSISTENCE.listings.version + 1.0)
            .save_to_path(&path)
            .unwrap();

        let err = load_checked_cache(&path, PERSISTENCE.listings.version).unwrap_err();
        assert!(err.to_string().contains("Cache version mismatch"));
    }
}
