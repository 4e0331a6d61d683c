// Data loading and the process-wide listing table
pub mod dataset;
pub mod listings;
pub mod pre_main;

// Re-export commonly used types
pub use listings::cache_file::CacheFile;
pub use pre_main::load_listing_data;
