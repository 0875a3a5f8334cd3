//! Filter to keep only destinations offering the requested activity.

use crate::query::TripQuery;
use crate::traits::Filter;
use data_loader::Destination;

/// Keeps candidates whose activity matches the query case-insensitively.
pub struct ActivityFilter;

impl Filter for ActivityFilter {
    fn name(&self) -> &str {
        "ActivityFilter"
    }

    fn apply<'c>(
        &self,
        candidates: Vec<&'c Destination>,
        query: &TripQuery<'_>,
    ) -> Vec<&'c Destination> {
        candidates
            .into_iter()
            .filter(|destination| destination.offers(query.activity))
            .collect()
    }
}
