//! Filter to keep only destinations the traveler's budget tier admits.
//!
//! See `crate::budget` for the band table.

use crate::budget;
use crate::query::TripQuery;
use crate::traits::Filter;
use data_loader::Destination;

/// Removes candidates whose cost rating is above what the budget admits.
///
/// ## Algorithm
/// 1. Look up the first budget band containing `query.budget`
/// 2. Keep candidates with `cost_rating <= band.max_cost`
/// 3. If no band contains the budget, keep nothing
pub struct BudgetTierFilter;

impl Filter for BudgetTierFilter {
    fn name(&self) -> &str {
        "BudgetTierFilter"
    }

    fn apply<'c>(
        &self,
        candidates: Vec<&'c Destination>,
        query: &TripQuery<'_>,
    ) -> Vec<&'c Destination> {
        let Some(tier) = budget::tier_for(query.budget) else {
            return Vec::new();
        };

        candidates
            .into_iter()
            .filter(|destination| tier.admits(destination.cost_rating))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::CostRating;

    fn create_test_destinations() -> Vec<Destination> {
        (1..=5)
            .map(|cost| {
                Destination::new(
                    format!("Region {}", cost),
                    "Hiking",
                    CostRating::new(cost).unwrap(),
                    "Sunny",
                )
            })
            .collect()
    }

    fn admitted_costs(budget: f64) -> Vec<u8> {
        let destinations = create_test_destinations();
        let query = TripQuery::new(budget, "Hiking", "Sunny");
        BudgetTierFilter
            .apply(destinations.iter().collect(), &query)
            .iter()
            .map(|d| d.cost_rating.get())
            .collect()
    }

    #[test]
    fn test_budget_tier_filter() {
        assert_eq!(admitted_costs(250.0), vec![1, 2]);
        assert_eq!(admitted_costs(500.0), vec![1, 2, 3]);
        assert_eq!(admitted_costs(700.0), vec![1, 2, 3, 4]);
        assert_eq!(admitted_costs(1200.0), vec![1, 2, 3, 4]);
        assert_eq!(admitted_costs(5000.0), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_budget_in_band_gap() {
        assert!(admitted_costs(1500.25).is_empty());
    }
}
