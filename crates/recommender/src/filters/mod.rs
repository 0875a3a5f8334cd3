//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod activity;
pub mod budget_tier;
pub mod weather;

// Re-export for convenience
pub use activity::ActivityFilter;
pub use budget_tier::BudgetTierFilter;
pub use weather::WeatherFilter;
