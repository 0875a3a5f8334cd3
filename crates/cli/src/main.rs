mod display;
mod plan;
mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use prompt::Prompter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use recommender::random_match;
use session::TripPlanner;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Trip Planner - destination recommendations for a group of travelers
#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(about = "Recommend destinations by budget, activity and weather", long_about = None)]
struct Cli {
    /// Path to the destination catalog CSV
    #[arg(short, long, env = "TRIP_PLANNER_CATALOG", default_value = "data/destinations.csv")]
    catalog: PathBuf,

    /// Seed for the random fallback (makes runs reproducible)
    #[arg(long, env = "TRIP_PLANNER_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan trips interactively for one or more travelers
    Plan {
        /// Number of travelers (asked for if omitted)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        travelers: Option<u16>,
    },

    /// Recommend a destination, falling back to a random one on the same activity
    Recommend {
        /// Budget in dollars
        #[arg(long, value_parser = parse_budget_arg)]
        budget: f64,

        /// Desired activity (case-insensitive)
        #[arg(long)]
        activity: String,

        /// Preferred weather (case-insensitive)
        #[arg(long)]
        weather: String,

        /// Print the suggested destination as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pick a random destination offering an activity
    Random {
        /// Desired activity (case-insensitive)
        #[arg(long)]
        activity: String,

        /// Print the destination as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every destination and the available activities and weather
    Catalog,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Plan { .. } => "plan",
            Commands::Recommend { .. } => "recommend",
            Commands::Random { .. } => "random",
            Commands::Catalog => "catalog",
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing; stderr keeps the prompts on stdout clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::load_from_file(&cli.catalog).with_context(|| {
        format!(
            "Failed to load destination catalog from {}",
            cli.catalog.display()
        )
    })?;

    info!(
        path = %cli.catalog.display(),
        destinations = catalog.len(),
        "Catalog ready"
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Dispatch to appropriate command handler
    info!(command = cli.command.name(), seeded = cli.seed.is_some(), "Running command");
    match cli.command {
        Commands::Plan { travelers } => handle_plan(&catalog, travelers.map(usize::from), &mut rng)?,
        Commands::Recommend {
            budget,
            activity,
            weather,
            json,
        } => handle_recommend(
            &mut io::stdout().lock(),
            &catalog,
            budget,
            &activity,
            &weather,
            json,
            &mut rng,
        )?,
        Commands::Random { activity, json } => {
            handle_random(&mut io::stdout().lock(), &catalog, &activity, json, &mut rng)?
        }
        Commands::Catalog => display::write_catalog(&mut io::stdout().lock(), &catalog)?,
    }

    Ok(())
}

fn parse_budget_arg(value: &str) -> Result<f64, String> {
    prompt::parse_budget(value)
        .ok_or_else(|| format!("'{}' is not a non-negative amount", value))
}

/// Handle the 'plan' command
#[instrument(skip(catalog, rng), fields(catalog_size = catalog.len()))]
fn handle_plan(catalog: &Catalog, travelers: Option<usize>, rng: &mut StdRng) -> Result<()> {
    let planner = TripPlanner::new(catalog);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    println!("{}", "Welcome to the Trip Planner!".bold().blue());
    plan::run_session(&planner, &mut prompter, travelers, rng)?;
    Ok(())
}

/// Handle the 'recommend' command
#[instrument(skip(out, catalog, rng), fields(catalog_size = catalog.len()))]
fn handle_recommend<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    budget: f64,
    activity: &str,
    weather: &str,
    json: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let planner = TripPlanner::new(catalog);
    let suggestion = planner.suggest_for(budget, activity, Some(weather), rng);

    if json {
        let destination = suggestion.map(|s| s.destination);
        writeln!(out, "{}", serde_json::to_string_pretty(&destination)?)?;
        return Ok(());
    }

    match suggestion {
        Some(suggestion) => display::write_suggestion(out, &suggestion, budget)?,
        None => writeln!(out, "{}", display::NO_MATCH)?,
    }
    Ok(())
}

/// Handle the 'random' command
#[instrument(skip(out, catalog, rng), fields(catalog_size = catalog.len()))]
fn handle_random<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    activity: &str,
    json: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let pick = random_match(catalog, activity, rng);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&pick)?)?;
        return Ok(());
    }

    match pick {
        Some(destination) => writeln!(
            out,
            "{} {} ({}, cost rating {}, usually {})",
            "✓".green(),
            destination.region,
            destination.activity,
            destination.cost_rating.dollars(),
            destination.weather
        )?,
        None => writeln!(out, "No destination offers {}.", activity)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{CostRating, Destination};

    fn create_test_catalog() -> Catalog {
        Catalog::from(vec![
            Destination::new("California", "Hiking", CostRating::new(3).unwrap(), "Sunny"),
            Destination::new("New York", "Sightseeing", CostRating::new(2).unwrap(), "Rainy"),
            Destination::new("Florida", "Beach", CostRating::new(4).unwrap(), "Sunny"),
        ])
    }

    fn recommend_output(budget: f64, activity: &str, weather: &str, json: bool) -> String {
        let catalog = create_test_catalog();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        handle_recommend(&mut out, &catalog, budget, activity, weather, json, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn random_output(activity: &str, json: bool) -> String {
        let catalog = create_test_catalog();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        handle_random(&mut out, &catalog, activity, json, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_recommend_json_is_bare_destination() {
        let output = recommend_output(1000.0, "Hiking", "Sunny", true);

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "region": "California",
                "activity": "Hiking",
                "cost_rating": 3,
                "weather": "Sunny"
            })
        );
    }

    #[test]
    fn test_recommend_and_random_json_agree() {
        let recommended: Destination =
            serde_json::from_str(&recommend_output(5000.0, "Beach", "Sunny", true)).unwrap();
        let random: Destination = serde_json::from_str(&random_output("Beach", true)).unwrap();

        assert_eq!(recommended, random);
        assert_eq!(recommended.region, "Florida");
    }

    #[test]
    fn test_json_no_match_is_null() {
        assert_eq!(recommend_output(1000.0, "Camping", "Sunny", true).trim(), "null");
        assert_eq!(random_output("Camping", true).trim(), "null");
    }

    #[test]
    fn test_recommend_text() {
        let output = recommend_output(2000.0, "Sightseeing", "Rainy", false);
        assert!(output.starts_with("We think you would enjoy a trip to New York."));
    }

    #[test]
    fn test_recommend_fallback_line() {
        let output = recommend_output(100.0, "Beach", "Sunny", false);

        assert!(output.contains("random Beach destination"));
        assert!(output.contains("How about Florida?"));
    }

    #[test]
    fn test_no_match_lines() {
        assert_eq!(
            recommend_output(1000.0, "Camping", "Sunny", false).trim(),
            display::NO_MATCH
        );
        assert_eq!(random_output("Camping", false).trim(), "No destination offers Camping.");
    }

    #[test]
    fn test_random_text() {
        let output = random_output("hiking", false);
        assert!(output.contains("California (Hiking, cost rating $$$, usually Sunny)"));
    }

    #[test]
    fn test_budget_arg() {
        assert_eq!(parse_budget_arg("750"), Ok(750.0));
        assert!(parse_budget_arg("-1").is_err());
    }
}
