use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::ListingTable;

/// Serialized listing cache consumed by the dashboard at startup.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile {
    pub version: f64,
    pub created_at_ms: i64,
    pub data: ListingTable,
}

impl CacheFile {
    pub fn new(data: ListingTable, version: f64) -> Self {
        Self {
            version,
            created_at_ms: Utc::now().timestamp_millis(),
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;
    use crate::domain::ConditionGrade;

    #[test]
    fn test_save_then_load_preserves_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("smartphone.bin");

        let table = ListingTable::new(
            "test",
            vec![
                listing("2024-01-02", "iPhone 12", "64GB", ConditionGrade::S, 40_000.0),
                listing("2024-01-09", "iPhone 12", "128GB", ConditionGrade::J, 12_000.0),
                listing("2024-06-01T05:00:00+09:00", "Pixel 7", "128GB", ConditionGrade::A, 30_000.0),
            ],
        );
        CacheFile::new(table.clone(), 1.0).save_to_path(&path).unwrap();

        let loaded = CacheFile::load_from_path(&path).unwrap();
        assert_eq!(loaded.version, 1.0);
        assert_eq!(loaded.data.listings, table.listings);
        // Equality compares instants; the recorded offset must survive too
        let tokyo = &loaded.data.listings[2].sales_date;
        assert_eq!(tokyo.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(tokyo.date_naive().to_string(), "2024-06-01");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CacheFile::load_from_path(&dir.path().join("absent.bin")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open cache file"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.bin");
        std::fs::write(&path, b"not a cache").unwrap();
        let err = CacheFile::load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to deserialize cache"));
    }
}
