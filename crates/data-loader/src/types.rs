//! Core domain types for the destination catalog.
//!
//! - `CostRating`: the 1..=5 price tier, validated on construction
//! - `Destination`: one catalog row
//! - `Catalog`: the ordered, read-only list of destinations

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Label matching
// =============================================================================

/// Compare two catalog labels (activity, weather, region) case-insensitively.
///
/// Labels are compared exactly after lowercasing; surrounding whitespace is
/// significant. Every case-insensitive comparison in the workspace goes
/// through here.
pub fn labels_match(a: &str, b: &str) -> bool {
    normalize_label(a) == normalize_label(b)
}

/// Normalized form of a label used as a comparison key
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase()
}

// =============================================================================
// Cost Rating
// =============================================================================

/// Relative price tier of a destination, 1 (cheap) to 5 (expensive).
///
/// The only way to get one is through `CostRating::new` (or `TryFrom<u8>`),
/// so a `Destination` can never hold an out-of-range rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CostRating(u8);

impl CostRating {
    pub const MIN: CostRating = CostRating(1);
    pub const MAX: CostRating = CostRating(5);

    /// Create a cost rating, rejecting anything outside 1..=5
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DataLoadError::invalid_value("cost_rating", value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Dollar-sign rendering used in user-facing output ("$$$" for 3)
    pub fn dollars(self) -> String {
        "$".repeat(self.0 as usize)
    }
}

impl TryFrom<u8> for CostRating {
    type Error = DataLoadError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CostRating> for u8 {
    fn from(rating: CostRating) -> Self {
        rating.0
    }
}

impl fmt::Display for CostRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Destination
// =============================================================================

/// One catalog record.
///
/// Destinations are created once at load time and only handed out by
/// reference afterwards, so they stay unchanged for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Destination identifier, e.g. a state name
    pub region: String,
    /// Primary activity offered (matched case-insensitively)
    pub activity: String,
    pub cost_rating: CostRating,
    /// Typical weather (matched case-insensitively)
    pub weather: String,
}

impl Destination {
    pub fn new(
        region: impl Into<String>,
        activity: impl Into<String>,
        cost_rating: CostRating,
        weather: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            activity: activity.into(),
            cost_rating,
            weather: weather.into(),
        }
    }

    /// Whether this destination offers `activity` (case-insensitive)
    pub fn offers(&self, activity: &str) -> bool {
        labels_match(&self.activity, activity)
    }

    /// Whether this destination has `weather` (case-insensitive)
    pub fn has_weather(&self, weather: &str) -> bool {
        labels_match(&self.weather, weather)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.region,
            self.activity,
            self.weather,
            self.cost_rating.dollars()
        )
    }
}

// =============================================================================
// Catalog - the in-memory destination list
// =============================================================================

/// Ordered sequence of destinations available for recommendation.
///
/// Order is the insertion order of the source; first-match recommendation
/// depends on it. A loaded catalog is never mutated, so share it by
/// reference (or `Arc<Catalog>`) across as many travelers as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) destinations: Vec<Destination>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            destinations: Vec::new(),
        }
    }

    /// All destinations, in catalog order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Append a destination at the end of the catalog, for building one by hand
    pub fn insert_destination(&mut self, destination: Destination) {
        self.destinations.push(destination);
    }
}

impl From<Vec<Destination>> for Catalog {
    fn from(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }
}

impl FromIterator<Destination> for Catalog {
    fn from_iter<I: IntoIterator<Item = Destination>>(iter: I) -> Self {
        Self {
            destinations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}
