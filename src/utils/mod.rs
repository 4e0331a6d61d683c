// Small shared helpers (time bucketing, formatting)
pub mod time_utils;

pub use time_utils::TimeUtils;
