//! Output formatting for suggestions, the catalog and group itineraries.

use colored::Colorize;
use data_loader::Catalog;
use session::{Suggestion, TravelGroup};
use std::io::{self, Write};

pub const NO_MATCH: &str = "No suitable trip found based on your preferences.";

/// "1000" for whole amounts, "1250.50" otherwise
pub fn format_budget(budget: f64) -> String {
    if budget.fract() == 0.0 {
        format!("{:.0}", budget)
    } else {
        format!("{:.2}", budget)
    }
}

pub fn write_suggestion<W: Write>(out: &mut W, suggestion: &Suggestion<'_>, budget: f64) -> io::Result<()> {
    let destination = suggestion.destination;

    if suggestion.is_fallback() {
        writeln!(
            out,
            "{} Nothing matched both your budget of ${} and your weather, so here is a random {} destination.",
            "!".yellow(),
            format_budget(budget),
            destination.activity
        )?;
        writeln!(
            out,
            "How about {}? It has a cost rating of {} and is usually {}.",
            destination.region,
            destination.cost_rating.dollars(),
            destination.weather
        )
    } else {
        writeln!(
            out,
            "We think you would enjoy a trip to {}. It is within your budget of ${} with a cost rating of {}. It is nice and {} and you would be able to try {}!",
            destination.region,
            format_budget(budget),
            destination.cost_rating.dollars(),
            destination.weather,
            destination.activity
        )
    }
}

pub fn write_catalog<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{}", format!("Destinations ({}):", catalog.len()).bold().blue())?;
    for (rank, destination) in catalog.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<16} {:<12} {:<6} {}",
            rank + 1,
            destination.region,
            destination.activity,
            destination.cost_rating.dollars(),
            destination.weather
        )?;
    }
    writeln!(out, "{}Activities: {}", "• ".green(), catalog.unique_activities().join(", "))?;
    writeln!(out, "{}Weather: {}", "• ".green(), catalog.unique_weather().join(", "))
}

pub fn write_itinerary<W: Write>(out: &mut W, group: &TravelGroup) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Trip Summary:".bold().blue())?;
    for traveler in group.iter() {
        writeln!(
            out,
            "{}{} (budget ${})",
            "• ".cyan(),
            traveler.name,
            format_budget(traveler.budget)
        )?;
        if traveler.booked_trips().is_empty() {
            writeln!(out, "  - No trips booked")?;
        }
        for trip in traveler.booked_trips() {
            writeln!(out, "  - {}", trip)?;
        }
    }
    writeln!(
        out,
        "Group budget: ${} | Trips booked: {}",
        format_budget(group.total_budget()),
        group.total_booked()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{CostRating, Destination};
    use session::SuggestionKind;

    #[test]
    fn test_format_budget() {
        assert_eq!(format_budget(1000.0), "1000");
        assert_eq!(format_budget(1250.5), "1250.50");
    }

    #[test]
    fn test_recommended_message() {
        let destination = Destination::new("California", "Hiking", CostRating::new(3).unwrap(), "Sunny");
        let suggestion = Suggestion {
            kind: SuggestionKind::Recommended,
            destination: &destination,
        };

        let mut out = Vec::new();
        write_suggestion(&mut out, &suggestion, 1000.0).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap().trim(),
            "We think you would enjoy a trip to California. It is within your budget of $1000 with a cost rating of $$$. It is nice and Sunny and you would be able to try Hiking!"
        );
    }

    #[test]
    fn test_fallback_message() {
        let destination = Destination::new("Florida", "Beach", CostRating::new(4).unwrap(), "Sunny");
        let suggestion = Suggestion {
            kind: SuggestionKind::RandomFallback,
            destination: &destination,
        };

        let mut out = Vec::new();
        write_suggestion(&mut out, &suggestion, 100.0).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("random Beach destination"));
        assert!(text.contains("How about Florida?"));
    }
}
