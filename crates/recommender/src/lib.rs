//! Destination recommendation for the trip planner.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - The budget tier table
//! - `recommend`: first-match tiered-budget recommendation
//! - `random_match`: uniform random fallback on activity alone
//!
//! ## Architecture
//! A recommendation narrows the catalog in stages:
//! 1. ActivityFilter keeps destinations offering the activity
//! 2. WeatherFilter keeps destinations with the weather
//! 3. BudgetTierFilter keeps what the budget band admits
//! 4. The first survivor in catalog order is the recommendation
//!
//! ## Example Usage
//! ```ignore
//! use recommender::{recommend, random_match};
//!
//! let choice = recommend(&catalog, 1000.0, "Hiking", "Sunny")
//!     .or_else(|| random_match(&catalog, "Hiking", &mut rand::rng()));
//! ```

pub mod traits;
pub mod query;
pub mod budget;
pub mod filters;
pub mod filter_pipeline;
pub mod recommend;
pub mod random_match;

// Re-export main types
pub use traits::Filter;
pub use query::TripQuery;
pub use budget::{BudgetBound, BudgetTier, BUDGET_TIERS};
pub use filter_pipeline::FilterPipeline;
pub use recommend::{recommend, Recommender};
pub use random_match::random_match;
