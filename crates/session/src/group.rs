//! A group of travelers planned one after another.

use crate::traveler::Traveler;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelGroup {
    travelers: Vec<Traveler>,
}

impl TravelGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, traveler: Traveler) {
        self.travelers.push(traveler);
    }

    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Traveler> {
        self.travelers.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Traveler> {
        self.travelers.iter_mut()
    }

    /// Sum of every traveler's budget
    pub fn total_budget(&self) -> f64 {
        self.travelers.iter().map(|t| t.budget).sum()
    }

    /// Number of trips booked across the group
    pub fn total_booked(&self) -> usize {
        self.travelers.iter().map(|t| t.booked_trips().len()).sum()
    }
}

impl FromIterator<Traveler> for TravelGroup {
    fn from_iter<I: IntoIterator<Item = Traveler>>(iter: I) -> Self {
        Self {
            travelers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::CostRating;

    #[test]
    fn test_group_totals() {
        let mut group: TravelGroup = [("Ann", 300.0), ("Bo", 1200.5)]
            .into_iter()
            .map(|(name, budget)| Traveler::new(name, budget).unwrap())
            .collect();

        assert_eq!(group.len(), 2);
        assert_eq!(group.total_budget(), 1500.5);
        assert_eq!(group.total_booked(), 0);

        if let Some(traveler) = group.iter_mut().next() {
            traveler.add_trip("Utah", CostRating::new(2).unwrap(), &["Hiking"], "Dry");
        }
        assert_eq!(group.total_booked(), 1);
    }

    #[test]
    fn test_empty_group() {
        let group = TravelGroup::new();

        assert!(group.is_empty());
        assert_eq!(group.total_budget(), 0.0);
    }
}
