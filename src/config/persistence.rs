//! File persistence and serialization configuration

pub struct ListingCacheConfig {
    /// Directory holding the listing table
    pub directory: &'static str,
    /// Base filename for the listing table (without extension)
    pub filename_without_ext: &'static str,
    /// Current version of the bincode cache layout
    pub version: f64,
}

pub struct PersistenceConfig {
    pub listings: ListingCacheConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    listings: ListingCacheConfig {
        directory: "data",
        filename_without_ext: "smartphone",
        version: 2.0, // 2.0: sales_date keeps its recorded UTC offset
    },
};

/// Default path of the bincode listing cache, e.g. "data/smartphone.bin"
pub fn listing_cache_path() -> std::path::PathBuf {
    std::path::PathBuf::from(PERSISTENCE.listings.directory).join(format!(
        "{}.bin",
        PERSISTENCE.listings.filename_without_ext
    ))
}

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";
