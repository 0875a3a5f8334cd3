//! Parser for destination catalog files.
//!
//! The catalog is a CSV file with a header row:
//!
//! ```text
//! State,Activity,Cost,Weather
//! California,Hiking,3,Sunny
//! ```
//!
//! Headers are also accepted in the older lowercase form
//! (`state,activity,cost_rating,weather`). Fields are trimmed and blank
//! lines are skipped. Row order is kept as-is.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// One CSV row before validation.
///
/// Every field is optional here so that a missing or empty cell turns into
/// a line-numbered `ParseError` instead of an opaque serde message.
#[derive(Debug, Deserialize)]
struct RawDestinationRow {
    #[serde(rename = "State", alias = "state", alias = "Region", alias = "region")]
    region: Option<String>,
    #[serde(rename = "Activity", alias = "activity")]
    activity: Option<String>,
    #[serde(
        rename = "Cost",
        alias = "cost",
        alias = "cost_rating",
        alias = "Cost Rating"
    )]
    cost: Option<String>,
    #[serde(rename = "Weather", alias = "weather")]
    weather: Option<String>,
}

impl RawDestinationRow {
    fn into_destination(self, source: &str, line: u64) -> Result<Destination> {
        let region = require(self.region, "state", source, line)?;
        let activity = require(self.activity, "activity", source, line)?;
        let cost = require(self.cost, "cost", source, line)?;
        let weather = require(self.weather, "weather", source, line)?;

        Ok(Destination::new(
            region,
            activity,
            parse_cost_rating(&cost, source, line)?,
            weather,
        ))
    }
}

fn require(field: Option<String>, name: &str, source: &str, line: u64) -> Result<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(parse_error(source, line, format!("Missing {}", name))),
    }
}

fn parse_error(source: &str, line: u64, reason: impl Into<String>) -> DataLoadError {
    DataLoadError::ParseError {
        file: source.to_string(),
        line,
        reason: reason.into(),
    }
}

/// Parse the cost column
///
/// Example: "3" -> Ok(CostRating(3))
///          "7" -> Err (out of range)
///          "cheap" -> Err (not an integer)
fn parse_cost_rating(value: &str, source: &str, line: u64) -> Result<CostRating> {
    let raw: u8 = value
        .parse()
        .map_err(|e| parse_error(source, line, format!("Invalid cost '{}': {}", value, e)))?;

    CostRating::new(raw).map_err(|_| {
        parse_error(
            source,
            line,
            format!(
                "Cost rating {} is outside {}..={}",
                raw,
                CostRating::MIN,
                CostRating::MAX
            ),
        )
    })
}

/// Parse destinations from any CSV reader.
///
/// `source` only labels error messages (usually the file name).
pub fn parse_destinations<R: Read>(reader: R, source: &str) -> Result<Vec<Destination>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: StringRecord = csv_reader.headers()?.clone();
    let mut destinations = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line_no = record.position().map(|p| p.line()).unwrap_or_default();

        let row: RawDestinationRow = record
            .deserialize(Some(&headers))
            .map_err(|e| parse_error(source, line_no, e.to_string()))?;

        destinations.push(row.into_destination(source, line_no)?);
    }

    Ok(destinations)
}

/// Parse a catalog CSV file from disk
pub fn parse_destinations_file(path: &Path) -> Result<Vec<Destination>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_destinations(file, &source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_destinations() {
        let csv = "State,Activity,Cost,Weather\n\
                   California,Hiking,3,Sunny\n\
                   New York,Sightseeing,2,Rainy\n";

        let destinations = parse_destinations(csv.as_bytes(), "inline.csv").unwrap();

        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[0].region, "California");
        assert_eq!(destinations[0].cost_rating.get(), 3);
        assert_eq!(destinations[1].region, "New York");
        assert_eq!(destinations[1].weather, "Rainy");
    }

    #[test]
    fn test_parse_lowercase_headers_and_padding() {
        let csv = "state, activity, cost_rating, weather\n\
                   Florida , Beach , 4 , Sunny\n\
                   \n\
                   Colorado,Skiing,5,Snowy\n";

        let destinations = parse_destinations(csv.as_bytes(), "inline.csv").unwrap();

        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[0].region, "Florida");
        assert_eq!(destinations[0].activity, "Beach");
        assert_eq!(destinations[1].cost_rating.get(), 5);
    }

    #[test]
    fn test_parse_cost_rating() {
        assert_eq!(parse_cost_rating("1", "t", 2).unwrap().get(), 1);
        assert!(parse_cost_rating("0", "t", 2).is_err());
        assert!(parse_cost_rating("6", "t", 2).is_err());
        assert!(parse_cost_rating("cheap", "t", 2).is_err());
        assert!(parse_cost_rating("-1", "t", 2).is_err());
    }

    #[test]
    fn test_non_integer_cost_reports_line() {
        let csv = "State,Activity,Cost,Weather\n\
                   California,Hiking,3,Sunny\n\
                   Oregon,Hiking,pricey,Rainy\n";

        let err = parse_destinations(csv.as_bytes(), "trips.csv").unwrap_err();

        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "trips.csv");
                assert_eq!(line, 3);
                assert!(reason.contains("pricey"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_field() {
        let csv = "State,Activity,Cost,Weather\n\
                   California,,3,Sunny\n";

        let err = parse_destinations(csv.as_bytes(), "trips.csv").unwrap_err();
        assert!(err.to_string().contains("Missing activity"));
    }

    #[test]
    fn test_missing_column() {
        let csv = "State,Activity,Cost\n\
                   California,Hiking,3\n";

        let err = parse_destinations(csv.as_bytes(), "trips.csv").unwrap_err();
        assert!(err.to_string().contains("Missing weather"));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_destinations_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
