//! Tiered-budget recommendation.
//!
//! Picks the earliest destination in catalog order that matches the
//! requested activity and weather and that the budget tier admits.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ActivityFilter, BudgetTierFilter, WeatherFilter};
use crate::query::TripQuery;
use data_loader::{Catalog, Destination};
use tracing::{debug, instrument};

/// First-match recommender over a catalog.
///
/// Holds no state besides its filter chain, so one instance can serve any
/// number of travelers against the same catalog.
pub struct Recommender {
    pipeline: FilterPipeline,
}

impl Recommender {
    /// Create a recommender with the standard activity → weather → budget chain
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::new()
                .add_filter(ActivityFilter)
                .add_filter(WeatherFilter)
                .add_filter(BudgetTierFilter),
        }
    }

    /// Every admitted destination, in catalog order
    pub fn admitted<'c>(&self, catalog: &'c Catalog, query: &TripQuery<'_>) -> Vec<&'c Destination> {
        self.pipeline.apply(catalog.iter().collect(), query)
    }

    /// The earliest admitted destination, or `None` when nothing fits
    #[instrument(skip(self, catalog), fields(catalog_size = catalog.len()))]
    pub fn recommend<'c>(
        &self,
        catalog: &'c Catalog,
        query: &TripQuery<'_>,
    ) -> Option<&'c Destination> {
        let choice = self.admitted(catalog, query).into_iter().next();
        debug!(region = choice.map(|d| d.region.as_str()), "Recommendation done");
        choice
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend a destination for a budget, activity and weather.
///
/// Returns `None` rather than an error when nothing matches.
pub fn recommend<'c>(
    catalog: &'c Catalog,
    budget: f64,
    activity: &str,
    weather: &str,
) -> Option<&'c Destination> {
    Recommender::new().recommend(catalog, &TripQuery::new(budget, activity, weather))
}
