//! Configuration module for the resale dashboard.

pub mod analysis;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig, GRADE_LETTERS, STACK_ORDER};
pub use persistence::{APP_STATE_PATH, PERSISTENCE, listing_cache_path};
