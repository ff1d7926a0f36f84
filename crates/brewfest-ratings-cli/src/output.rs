//! Console rendering of progress events and catalog listings.

use brewfest_ratings::progress::{ProgressEventKind, ProgressReceiver, Stage};
use brewfest_ratings::BeerEntry;
use tokio::sync::broadcast::error::RecvError;

/// The console line for one event, if it has one.
pub fn render(event: &ProgressEventKind) -> Option<String> {
    match event {
        ProgressEventKind::StageStarted { stage } => Some(
            match stage {
                Stage::FetchCatalog => "Fetching beers...",
                Stage::FetchRatings => "Fetching untappd ratings...",
                Stage::WriteCsv => "Generating .csv...",
            }
            .to_string(),
        ),
        ProgressEventKind::CatalogLoaded { beer_count } => {
            Some(format!("Found {beer_count} beers."))
        }
        ProgressEventKind::ItemStarted { index, total, .. } => Some(format!("{index} / {total}")),
        ProgressEventKind::ItemFinished { .. } => None,
        ProgressEventKind::OutputWritten { path, .. } => {
            Some(format!("Output written to {path}"))
        }
    }
}

/// Print events as they arrive until the sending side closes.
pub async fn print_progress(mut rx: ProgressReceiver) {
    loop {
        match rx.recv().await {
            Ok(e) => {
                if let Some(line) = render(&e.event) {
                    println!("{line}");
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("progress display skipped {skipped} events");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Tab-separated listing line for one catalog entry.
pub fn catalog_line(beer: &BeerEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        beer.brewery, beer.name, beer.day, beer.abv, beer.style
    )
}
