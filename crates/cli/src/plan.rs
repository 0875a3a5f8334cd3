//! The interactive group planning session.
//!
//! For each traveler: ask for name, budget, activity and weather, show the
//! planner's suggestion, and book it if they say yes.

use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use session::{TravelGroup, Traveler, TripPlanner};
use std::io::{BufRead, Write};

use crate::display;
use crate::prompt::Prompter;

pub fn run_session<R, W, G>(
    planner: &TripPlanner<'_>,
    prompter: &mut Prompter<R, W>,
    travelers: Option<usize>,
    rng: &mut G,
) -> Result<TravelGroup>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let count = match travelers {
        Some(count) => count,
        None => prompter.ask_count("How many travelers are in your group? ")?,
    };

    let catalog = planner.catalog();
    let activities = catalog.unique_activities().join(", ");
    let weather_options = catalog.unique_weather().join(", ");

    let mut group = TravelGroup::new();
    for index in 1..=count {
        writeln!(prompter.output())?;
        writeln!(
            prompter.output(),
            "{}",
            format!("Traveler {} of {}", index, count).bold()
        )?;

        let name = prompter.ask_text("Enter your name: ")?;
        let budget = prompter.ask_budget("Enter your budget: ")?;
        writeln!(prompter.output(), "Available activities: {}", activities)?;
        let activity = prompter.ask_text("Enter your desired activity: ")?;
        writeln!(prompter.output(), "Available weather: {}", weather_options)?;
        let weather = prompter.ask_text("Enter your preferred weather conditions: ")?;

        let mut traveler = Traveler::new(name, budget)?.with_preferences(activity, weather);

        match planner.suggest(&traveler, rng) {
            Some(suggestion) => {
                display::write_suggestion(prompter.output(), &suggestion, traveler.budget)?;
                if prompter.confirm("Would you like to add this trip to your list? (yes/no) ")? {
                    traveler.book(suggestion.destination);
                    writeln!(
                        prompter.output(),
                        "Trip to {} added to your list of trips.",
                        suggestion.destination.region
                    )?;
                } else {
                    writeln!(prompter.output(), "No trip added.")?;
                }
            }
            None => writeln!(prompter.output(), "{}", display::NO_MATCH)?,
        }

        group.add(traveler);
    }

    display::write_itinerary(prompter.output(), &group)?;
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Catalog, CostRating, Destination};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn create_test_catalog() -> Catalog {
        Catalog::from(vec![
            Destination::new("California", "Hiking", CostRating::new(3).unwrap(), "Sunny"),
            Destination::new("New York", "Sightseeing", CostRating::new(2).unwrap(), "Rainy"),
            Destination::new("Florida", "Beach", CostRating::new(4).unwrap(), "Sunny"),
        ])
    }

    fn run(script: &str, travelers: Option<usize>) -> (TravelGroup, String) {
        let catalog = create_test_catalog();
        let planner = TripPlanner::new(&catalog);
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut rng = StdRng::seed_from_u64(8);

        let group = run_session(&planner, &mut prompter, travelers, &mut rng).unwrap();
        let output = String::from_utf8(prompter.output().clone()).unwrap();
        (group, output)
    }

    #[test]
    fn test_add_trip_yes() {
        let (group, output) = run("John\n1000\nHiking\nSunny\nyes\n", Some(1));

        assert!(output.contains(
            "We think you would enjoy a trip to California. It is within your budget of $1000"
        ));
        assert!(output.contains("Trip to California added to your list of trips."));
        assert_eq!(group.total_booked(), 1);
    }

    #[test]
    fn test_add_trip_no() {
        let (group, output) = run("John\n1000\nHiking\nSunny\nno\n", Some(1));

        assert!(output.contains("No trip added."));
        assert_eq!(group.total_booked(), 0);
    }

    #[test]
    fn test_no_match() {
        let (group, output) = run("Ann\n300\nCamping\nSunny\n", Some(1));

        assert!(output.contains(display::NO_MATCH));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_group_of_two_with_fallback() {
        let script = "2\n\
                      John\n1000\nHiking\nSunny\nyes\n\
                      Mia\n$200\nbeach\nsunny\nmaybe\ny\n";
        let (group, output) = run(script, None);

        assert_eq!(group.len(), 2);
        assert_eq!(group.total_booked(), 2);
        assert!(output.contains("random Beach destination"));
        assert!(output.contains("Trip to Florida added to your list of trips."));
        assert!(output.contains("Invalid input. Please answer yes or no."));
        assert!(output.contains("Trips booked: 2"));
    }
}
