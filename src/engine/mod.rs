pub mod dashboard;

// Re-export key components
pub use dashboard::DashboardEngine;
