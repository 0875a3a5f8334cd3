//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a set of candidate destinations.

use crate::query::TripQuery;
use data_loader::Destination;

/// Core trait for filtering candidate destinations.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// Filters borrow destinations from the catalog and hand back the subset
/// they keep, in the order they received them. They cannot fail: an empty
/// result is the only way to say "nothing fits".
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership of the Vec)
    /// * `query` - The traveler's request
    fn apply<'c>(
        &self,
        candidates: Vec<&'c Destination>,
        query: &TripQuery<'_>,
    ) -> Vec<&'c Destination>;
}
