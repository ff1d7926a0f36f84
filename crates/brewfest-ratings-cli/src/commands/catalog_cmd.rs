//! `brewfest-ratings catalog` — list the flattened festival catalog.

use std::time::Duration;

use anyhow::{Context, Result};
use brewfest_ratings::config::DEFAULT_TIMEOUT;
use brewfest_ratings::http_client::DEFAULT_USER_AGENT;
use brewfest_ratings::{fetch_catalog, BeerEntry, HttpClient};

use crate::output;

/// Fetch the catalog without scraping anything.
pub async fn fetch(catalog_url: &str, timeout_ms: Option<u64>) -> Result<Vec<BeerEntry>> {
    let timeout = timeout_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT);
    let client = HttpClient::new(timeout, DEFAULT_USER_AGENT);
    fetch_catalog(&client, catalog_url)
        .await
        .with_context(|| format!("could not load catalog from {catalog_url}"))
}

/// Fetch and print the catalog, one beer per line or as a JSON array.
pub async fn run(catalog_url: &str, timeout_ms: Option<u64>, json: bool) -> Result<()> {
    let beers = fetch(catalog_url, timeout_ms).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&beers)?);
    } else {
        for beer in &beers {
            println!("{}", output::catalog_line(beer));
        }
        eprintln!("{} beers", beers.len());
    }
    Ok(())
}
