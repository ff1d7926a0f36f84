//! BrewFest Ratings — fetch a beer festival's catalog, enrich every beer with
//! its crowd rating, and write the result to a CSV file.

pub mod catalog;
pub mod config;
pub mod csv_writer;
pub mod enrich;
pub mod extract;
pub mod http_client;
pub mod pacing;
pub mod pipeline;
pub mod progress;
pub mod rating;
pub mod types;

pub use catalog::{fetch_catalog, parse_catalog};
pub use config::PipelineConfig;
pub use csv_writer::{random_output_filename, to_csv_string, write_csv, COLUMNS};
pub use enrich::enrich_all;
pub use extract::{extract_first, parse_rating, SelectorSet};
pub use http_client::HttpClient;
pub use pacing::PacingGate;
pub use pipeline::{run, run_with_source, RunSummary};
pub use rating::{RatingScraper, RatingSource};
pub use types::*;
