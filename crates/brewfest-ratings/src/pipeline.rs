//! Fetch → enrich → write, end to end.

use std::path::{Path, PathBuf};

use crate::catalog::fetch_catalog;
use crate::config::PipelineConfig;
use crate::csv_writer::write_csv;
use crate::enrich::enrich_all;
use crate::http_client::HttpClient;
use crate::pacing::PacingGate;
use crate::progress::{Emitter, ProgressEventKind, ProgressSender, Stage};
use crate::rating::{RatingScraper, RatingSource};
use crate::types::RatingsResult;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    /// Catalog entries written.
    pub total: usize,
    /// Entries that found a rating match.
    pub matched: usize,
}

/// Run the whole pipeline against the configured endpoints.
///
/// The sender is dropped when the run ends, which closes the channel for
/// any subscriber.
pub async fn run(
    config: &PipelineConfig,
    progress: Option<ProgressSender>,
) -> RatingsResult<RunSummary> {
    let client = HttpClient::new(config.timeout, &config.user_agent);
    let scraper = RatingScraper::new(
        client.clone(),
        &config.search_url,
        config.selectors.clone(),
    );
    run_with_source(config, &client, &scraper, progress).await
}

/// Same as [`run`], with the rating lookups delegated to `source`.
pub async fn run_with_source(
    config: &PipelineConfig,
    client: &HttpClient,
    source: &dyn RatingSource,
    progress: Option<ProgressSender>,
) -> RatingsResult<RunSummary> {
    let mut emitter = Emitter::new(progress);

    emitter.emit(ProgressEventKind::StageStarted {
        stage: Stage::FetchCatalog,
    });
    let beers = fetch_catalog(client, &config.catalog_url).await?;
    emitter.emit(ProgressEventKind::CatalogLoaded {
        beer_count: beers.len(),
    });

    emitter.emit(ProgressEventKind::StageStarted {
        stage: Stage::FetchRatings,
    });
    let gate = PacingGate::new(config.delay);
    let enriched = enrich_all(beers, source, &gate, &mut emitter).await?;

    emitter.emit(ProgressEventKind::StageStarted {
        stage: Stage::WriteCsv,
    });
    let output_path = write_csv(&config.output_dir, &enriched)?;
    emitter.emit(ProgressEventKind::OutputWritten {
        path: display_path(&config.output_dir, &output_path),
        rows: enriched.len(),
    });

    Ok(RunSummary {
        output_path,
        total: enriched.len(),
        matched: enriched.iter().filter(|e| e.is_matched()).count(),
    })
}

/// How the written file is shown to the user: the bare file name when it
/// went to the current directory, the joined path otherwise.
fn display_path(dir: &Path, path: &Path) -> String {
    match path.file_name() {
        Some(name) if dir == Path::new(".") || dir.as_os_str().is_empty() => {
            name.to_string_lossy().into_owned()
        }
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_in_current_dir_is_file_name() {
        let dir = PipelineConfig::default().output_dir;
        let path = dir.join("output-0123456789abcdef01234567.csv");
        assert_eq!(
            display_path(&dir, &path),
            "output-0123456789abcdef01234567.csv"
        );
        assert_eq!(
            display_path(Path::new(""), Path::new("output-ab.csv")),
            "output-ab.csv"
        );
    }

    #[test]
    fn test_display_path_elsewhere_keeps_dir() {
        let dir = Path::new("sheets");
        let path = dir.join("output-ab.csv");
        assert_eq!(
            display_path(dir, &path),
            Path::new("sheets").join("output-ab.csv").display().to_string()
        );
    }
}
