//! # Trip Planner
//!
//! Coordinates one traveler's pass through the engine:
//! 1. Build the query from the traveler's budget and preferences
//! 2. Ask the tiered recommender for the first admitted destination
//! 3. Fall back to a random destination with the same activity
//! 4. Hand the suggestion back for the caller to confirm and book

use data_loader::{Catalog, Destination};
use rand::Rng;
use recommender::{random_match, Recommender, TripQuery};
use serde::Serialize;
use tracing::{info, warn};

use crate::traveler::Traveler;

/// How a suggestion was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Matched activity, weather and budget tier
    Recommended,
    /// Only the activity matched; picked at random
    RandomFallback,
}

/// A destination offered to a traveler
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Suggestion<'c> {
    pub kind: SuggestionKind,
    pub destination: &'c Destination,
}

impl Suggestion<'_> {
    pub fn is_fallback(&self) -> bool {
        self.kind == SuggestionKind::RandomFallback
    }
}

/// Runs recommend-then-fallback against a shared, read-only catalog
pub struct TripPlanner<'c> {
    catalog: &'c Catalog,
    recommender: Recommender,
}

impl<'c> TripPlanner<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            recommender: Recommender::new(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Suggest a destination for a traveler.
    ///
    /// Returns `None` if the traveler has no preferred activity or nothing
    /// in the catalog offers it. A missing preferred weather skips straight
    /// to the random fallback.
    pub fn suggest<R: Rng + ?Sized>(&self, traveler: &Traveler, rng: &mut R) -> Option<Suggestion<'c>> {
        let Some(activity) = traveler.preferred_activity.as_deref() else {
            warn!(traveler = %traveler.name, "No preferred activity; nothing to suggest");
            return None;
        };

        let recommended = traveler
            .query()
            .and_then(|query| self.recommender.recommend(self.catalog, &query));
        let suggestion = self.recommended_or_random(recommended, activity, rng);

        match &suggestion {
            Some(s) => info!(
                traveler = %traveler.name,
                region = %s.destination.region,
                kind = ?s.kind,
                "Suggested destination"
            ),
            None => info!(traveler = %traveler.name, activity, "No destination offers this activity"),
        }
        suggestion
    }

    /// Suggest a destination for raw preferences
    pub fn suggest_for<R: Rng + ?Sized>(
        &self,
        budget: f64,
        activity: &str,
        weather: Option<&str>,
        rng: &mut R,
    ) -> Option<Suggestion<'c>> {
        let recommended = weather.and_then(|weather| {
            self.recommender
                .recommend(self.catalog, &TripQuery::new(budget, activity, weather))
        });
        self.recommended_or_random(recommended, activity, rng)
    }

    fn recommended_or_random<R: Rng + ?Sized>(
        &self,
        recommended: Option<&'c Destination>,
        activity: &str,
        rng: &mut R,
    ) -> Option<Suggestion<'c>> {
        if let Some(destination) = recommended {
            return Some(Suggestion {
                kind: SuggestionKind::Recommended,
                destination,
            });
        }

        random_match(self.catalog, activity, rng).map(|destination| Suggestion {
            kind: SuggestionKind::RandomFallback,
            destination,
        })
    }
}
