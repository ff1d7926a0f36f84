//! `brewfest-ratings run` — fetch, enrich and write the CSV.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use brewfest_ratings::{pipeline, progress, PipelineConfig, RunSummary};

use crate::output;

/// Overrides for the run; anything left `None` keeps the built-in default.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub catalog_url: Option<String>,
    pub search_url: Option<String>,
    pub delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

impl RunOptions {
    pub fn into_config(self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            catalog_url: self.catalog_url.unwrap_or(defaults.catalog_url),
            search_url: self.search_url.unwrap_or(defaults.search_url),
            delay: self
                .delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay),
            timeout: self
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            ..defaults
        }
    }
}

/// Run the pipeline, printing progress lines as it goes.
pub async fn run(options: RunOptions) -> Result<RunSummary> {
    let config = options.into_config();
    tracing::info!(
        "run: catalog={} search={} delay={}ms",
        config.catalog_url,
        config.search_url,
        config.delay.as_millis()
    );

    let (tx, rx) = progress::channel();
    let printer = tokio::spawn(output::print_progress(rx));

    let result = pipeline::run(&config, Some(tx)).await;
    // The pipeline dropped its sender, so the printer drains and exits.
    let _ = printer.await;

    let summary = result.context("ratings run failed")?;
    tracing::info!(
        "run: {}/{} matched, written to {}",
        summary.matched,
        summary.total,
        summary.output_path.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_into_config_defaults() {
        let config = RunOptions::default().into_config();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_into_config_overrides() {
        let config = RunOptions {
            catalog_url: Some("http://localhost/data.json".to_string()),
            search_url: None,
            delay_ms: Some(250),
            timeout_ms: Some(1000),
            output_dir: Some(PathBuf::from("/tmp/out")),
        }
        .into_config();

        assert_eq!(config.catalog_url, "http://localhost/data.json");
        assert_eq!(config.search_url, PipelineConfig::default().search_url);
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[tokio::test]
    async fn test_run_writes_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "brewer": [{ "name": "Acme", "beer": [
                    { "name": "Lager", "abv": 5, "style": "Pale", "stage": ["Fri"] }
                ]}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let out = tempfile::tempdir().unwrap();
        let summary = run(RunOptions {
            catalog_url: Some(format!("{}/data.json", server.uri())),
            search_url: Some(format!("{}/search", server.uri())),
            delay_ms: Some(0),
            timeout_ms: None,
            output_dir: Some(out.path().to_path_buf()),
        })
        .await
        .unwrap();

        assert_eq!(summary.total, 1);
        assert!(summary.output_path.exists());
    }

    #[tokio::test]
    async fn test_run_error_has_context() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let out = tempfile::tempdir().unwrap();
        let err = run(RunOptions {
            catalog_url: Some(format!("{}/data.json", server.uri())),
            output_dir: Some(out.path().to_path_buf()),
            ..RunOptions::default()
        })
        .await
        .unwrap_err();

        let msg = format!("{err:#}");
        assert!(msg.starts_with("ratings run failed"));
        assert!(msg.contains("404"));
    }
}
