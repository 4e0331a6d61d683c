// Domain types and value objects
pub mod condition;
pub mod listing;

// Re-export commonly used types
pub use condition::ConditionGrade;
pub use listing::{Listing, ListingTable};
