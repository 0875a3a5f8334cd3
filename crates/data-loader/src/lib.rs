//! # Data Loader Crate
//!
//! Loads the destination catalog the trip planner recommends from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CostRating, Destination, Catalog)
//! - **parser**: Parse CSV rows into Destinations
//! - **catalog**: Load a Catalog from disk and query it
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/destinations.csv"))?;
//!
//! for destination in &catalog {
//!     println!("{}", destination);
//! }
//! println!("Activities: {:?}", catalog.unique_activities());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Core types
    Catalog,
    CostRating,
    Destination,
    // Matching helpers
    labels_match,
    normalize_label,
};
