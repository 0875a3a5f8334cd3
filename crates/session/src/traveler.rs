//! Per-traveler session state.
//!
//! A `Traveler` carries the budget and preferences asked for at the prompt
//! and the trips they confirmed. Nothing here is persisted; travelers live
//! until the process exits.

use anyhow::{bail, Result};
use data_loader::{CostRating, Destination};
use recommender::TripQuery;
use serde::Serialize;

/// One user in a planning session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traveler {
    pub name: String,
    pub budget: f64,
    pub preferred_activity: Option<String>,
    pub preferred_weather: Option<String>,
    /// Append-only; see `add_trip` / `book`
    booked_trips: Vec<Destination>,
}

impl Traveler {
    /// Create a traveler with no preferences and no trips.
    ///
    /// The name must not be blank and the budget must be a finite,
    /// non-negative amount.
    pub fn new(name: impl Into<String>, budget: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            bail!("Traveler name cannot be empty");
        }
        if !budget.is_finite() || budget < 0.0 {
            bail!("Budget must be a non-negative amount, got {}", budget);
        }

        Ok(Self {
            name,
            budget,
            preferred_activity: None,
            preferred_weather: None,
            booked_trips: Vec::new(),
        })
    }

    /// Set preferred activity and weather (builder style)
    pub fn with_preferences(mut self, activity: impl Into<String>, weather: impl Into<String>) -> Self {
        self.set_preferences(activity, weather);
        self
    }

    pub fn set_preferences(&mut self, activity: impl Into<String>, weather: impl Into<String>) {
        self.preferred_activity = Some(activity.into());
        self.preferred_weather = Some(weather.into());
    }

    /// The recommendation request for this traveler, if both preferences are set
    pub fn query(&self) -> Option<TripQuery<'_>> {
        match (&self.preferred_activity, &self.preferred_weather) {
            (Some(activity), Some(weather)) => Some(TripQuery::new(self.budget, activity, weather)),
            _ => None,
        }
    }

    /// Record a trip from its parts.
    ///
    /// Booking is unconditional: budget and activity compatibility are the
    /// caller's business. Multiple activities are stored joined with ", ".
    pub fn add_trip<S: AsRef<str>>(
        &mut self,
        destination: impl Into<String>,
        cost_rating: CostRating,
        activities: &[S],
        weather: impl Into<String>,
    ) {
        let activity = activities
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(", ");

        self.booked_trips
            .push(Destination::new(destination, activity, cost_rating, weather));
    }

    /// Record a catalog destination as booked
    pub fn book(&mut self, destination: &Destination) {
        self.booked_trips.push(destination.clone());
    }

    /// Booked trips in the order they were confirmed
    pub fn booked_trips(&self) -> &[Destination] {
        &self.booked_trips
    }
}
