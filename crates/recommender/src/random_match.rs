//! Random fallback: any destination offering the activity.
//!
//! Used when the tiered recommender finds nothing. Budget and weather are
//! ignored here; only the activity has to match.

use data_loader::{Catalog, Destination};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Pick a destination offering `activity`, uniformly at random.
///
/// The random source is passed in, so callers decide between a seeded
/// `StdRng` (tests, `--seed`) and an OS-seeded one.
#[instrument(skip(catalog, rng), fields(catalog_size = catalog.len()))]
pub fn random_match<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    activity: &str,
    rng: &mut R,
) -> Option<&'c Destination> {
    let matches: Vec<&Destination> = catalog.iter().filter(|d| d.offers(activity)).collect();
    debug!(matches = matches.len(), "Activity matches for random pick");

    matches.choose(rng).copied()
}
