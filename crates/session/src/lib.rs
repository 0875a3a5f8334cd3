//! # Session Crate
//!
//! Traveler bookkeeping and the per-traveler planning flow.
//!
//! ## Components
//!
//! - **traveler**: budget, preferences and append-only booked trips
//! - **group**: several travelers planned one after another
//! - **planner**: recommend-then-random-fallback over a shared catalog
//!
//! ## Example Usage
//!
//! ```ignore
//! use session::{Traveler, TripPlanner};
//!
//! let planner = TripPlanner::new(&catalog);
//! let mut traveler = Traveler::new("Ann", 800.0)?.with_preferences("Beach", "Sunny");
//!
//! if let Some(suggestion) = planner.suggest(&traveler, &mut rand::rng()) {
//!     traveler.book(suggestion.destination);
//! }
//! ```

pub mod traveler;
pub mod group;
pub mod planner;

pub use traveler::Traveler;
pub use group::TravelGroup;
pub use planner::{Suggestion, SuggestionKind, TripPlanner};
