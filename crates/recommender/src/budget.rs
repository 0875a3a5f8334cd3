//! Budget tiers: which cost ratings a budget can afford.
//!
//! The band table is evaluated top to bottom and the first band whose
//! budget predicate holds decides admission:
//!
//! | budget        | max cost rating |
//! |---------------|-----------------|
//! | <= 300        | 2               |
//! | <= 500        | 3               |
//! | <= 1000       | 4               |
//! | <= 1500       | 4               |
//! | >= 1501       | 5               |
//!
//! The two identical 1000/1500 bands and the hole between 1500 and 1501
//! are the planner's established behavior and are kept as-is; a budget of
//! 1500.5 falls in no band and admits nothing.

use data_loader::CostRating;

/// Which side of the threshold a band covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetBound {
    AtMost(f64),
    AtLeast(f64),
}

impl BudgetBound {
    pub fn contains(self, budget: f64) -> bool {
        match self {
            BudgetBound::AtMost(limit) => budget <= limit,
            BudgetBound::AtLeast(limit) => budget >= limit,
        }
    }
}

/// One price-sensitivity band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetTier {
    pub bound: BudgetBound,
    /// Highest cost rating this band admits
    pub max_cost: u8,
}

impl BudgetTier {
    pub fn admits(&self, cost_rating: CostRating) -> bool {
        cost_rating.get() <= self.max_cost
    }
}

pub static BUDGET_TIERS: [BudgetTier; 5] = [
    BudgetTier { bound: BudgetBound::AtMost(300.0), max_cost: 2 },
    BudgetTier { bound: BudgetBound::AtMost(500.0), max_cost: 3 },
    BudgetTier { bound: BudgetBound::AtMost(1000.0), max_cost: 4 },
    BudgetTier { bound: BudgetBound::AtMost(1500.0), max_cost: 4 },
    BudgetTier { bound: BudgetBound::AtLeast(1501.0), max_cost: 5 },
];

/// First band whose budget predicate holds, if any
pub fn tier_for(budget: f64) -> Option<&'static BudgetTier> {
    BUDGET_TIERS.iter().find(|tier| tier.bound.contains(budget))
}

/// Whether `budget` can afford a destination rated `cost_rating`
pub fn admits(budget: f64, cost_rating: CostRating) -> bool {
    tier_for(budget).is_some_and(|tier| tier.admits(cost_rating))
}
