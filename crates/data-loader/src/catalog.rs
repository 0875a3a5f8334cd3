//! Catalog loading and lookup helpers.
//!
//! Builds a `Catalog` from a CSV file and answers the small questions the
//! prompt layer asks about it (which activities exist, which weather, ...).

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the destination catalog from a CSV file
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let destinations = parser::parse_destinations_file(path)?;
        info!(
            path = %path.display(),
            destinations = destinations.len(),
            "Loaded destination catalog"
        );
        Ok(Self::from(destinations))
    }

    /// Load a catalog from an in-memory or streamed CSV source
    pub fn load_from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let destinations = parser::parse_destinations(reader, source)?;
        Ok(Self::from(destinations))
    }

    /// Distinct activity labels in first-seen order.
    ///
    /// Labels that differ only in case count once; the first spelling wins.
    pub fn unique_activities(&self) -> Vec<&str> {
        unique_labels(self.iter().map(|d| d.activity.as_str()))
    }

    /// Distinct weather labels in first-seen order
    pub fn unique_weather(&self) -> Vec<&str> {
        unique_labels(self.iter().map(|d| d.weather.as_str()))
    }

    /// First destination whose region matches `region` case-insensitively
    pub fn find_region(&self, region: &str) -> Option<&Destination> {
        self.iter().find(|d| labels_match(&d.region, region))
    }
}

fn unique_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    labels
        .filter(|label| seen.insert(normalize_label(label)))
        .collect()
}
