//! The request a traveler makes of the recommender.

/// Budget and preferences for a single recommendation.
///
/// Borrowed so it can be built straight from a `Traveler` or CLI args
/// without copying strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripQuery<'q> {
    pub budget: f64,
    pub activity: &'q str,
    pub weather: &'q str,
}

impl<'q> TripQuery<'q> {
    pub fn new(budget: f64, activity: &'q str, weather: &'q str) -> Self {
        Self {
            budget,
            activity,
            weather,
        }
    }
}
