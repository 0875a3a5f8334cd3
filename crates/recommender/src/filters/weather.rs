//! Filter to keep only destinations with the requested weather.

use crate::query::TripQuery;
use crate::traits::Filter;
use data_loader::Destination;

/// Keeps candidates whose typical weather matches the query case-insensitively.
pub struct WeatherFilter;

impl Filter for WeatherFilter {
    fn name(&self) -> &str {
        "WeatherFilter"
    }

    fn apply<'c>(
        &self,
        candidates: Vec<&'c Destination>,
        query: &TripQuery<'_>,
    ) -> Vec<&'c Destination> {
        candidates
            .into_iter()
            .filter(|destination| destination.has_weather(query.weather))
            .collect()
    }
}
