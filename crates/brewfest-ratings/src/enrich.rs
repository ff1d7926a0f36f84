//! Sequential enrichment of catalog entries with rating matches.
//!
//! One lookup at a time, in catalog order, with the pacing gate awaited after
//! every lookup whatever its outcome. The first lookup failure aborts the
//! whole loop; nothing is skipped.

use crate::pacing::PacingGate;
use crate::progress::{Emitter, ProgressEventKind};
use crate::rating::RatingSource;
use crate::types::{BeerEntry, EnrichedBeerEntry, RatingsResult};

/// Look up every entry and merge the results, preserving input order.
pub async fn enrich_all(
    entries: Vec<BeerEntry>,
    source: &dyn RatingSource,
    gate: &PacingGate,
    emitter: &mut Emitter,
) -> RatingsResult<Vec<EnrichedBeerEntry>> {
    let total = entries.len();
    let mut enriched = Vec::with_capacity(total);

    for (i, beer) in entries.into_iter().enumerate() {
        let index = i + 1;
        emitter.emit(ProgressEventKind::ItemStarted {
            index,
            total,
            brewery: beer.brewery.clone(),
            name: beer.name.clone(),
        });

        let outcome = source.lookup(&beer).await;
        gate.wait().await;
        let rating = outcome?;

        let entry = EnrichedBeerEntry::merge(beer, rating);
        emitter.emit(ProgressEventKind::ItemFinished {
            index,
            total,
            matched: entry.is_matched(),
        });
        enriched.push(entry);
    }

    let matched = enriched.iter().filter(|e| e.is_matched()).count();
    tracing::info!("enrichment: {matched}/{total} beers matched");
    Ok(enriched)
}
