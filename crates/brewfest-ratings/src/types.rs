//! Core data types for catalog entries, rating matches, and errors.

use serde::{Deserialize, Serialize};

/// One beer's festival metadata, flattened out of the brewer listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerEntry {
    pub brewery: String,
    pub name: String,
    pub abv: f64,
    pub style: String,
    /// First stage (festival day) the beer is poured on.
    pub day: String,
}

impl BeerEntry {
    /// Free-text search query for the rating site: `"<brewery> <name>"`.
    pub fn search_query(&self) -> String {
        format!("{} {}", self.brewery, self.name)
    }
}

/// Top search result from the rating site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingMatch {
    /// `None` when the result item carries no detail link.
    pub untappd_href: Option<String>,
    /// `None` when the result carries no parsable rating yet.
    pub untappd_rating: Option<f64>,
}

/// A catalog entry merged with its (possibly absent) rating match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedBeerEntry {
    #[serde(flatten)]
    pub beer: BeerEntry,
    #[serde(flatten)]
    pub rating: Option<RatingMatch>,
}

impl EnrichedBeerEntry {
    /// Merge an entry with the scraper's answer.
    pub fn merge(beer: BeerEntry, rating: Option<RatingMatch>) -> Self {
        Self { beer, rating }
    }

    pub fn is_matched(&self) -> bool {
        self.rating.is_some()
    }

    pub fn untappd_href(&self) -> Option<&str> {
        self.rating.as_ref().and_then(|r| r.untappd_href.as_deref())
    }

    pub fn untappd_rating(&self) -> Option<f64> {
        self.rating.as_ref().and_then(|r| r.untappd_rating)
    }
}

/// Failure of a single HTTP GET, before it is attributed to a pipeline stage.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Errors that can occur while building the ratings sheet.
#[derive(thiserror::Error, Debug)]
pub enum RatingsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog shape error: {0}")]
    Shape(String),

    #[error("Scrape error: {0}")]
    Scrape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience result type.
pub type RatingsResult<T> = Result<T, RatingsError>;
