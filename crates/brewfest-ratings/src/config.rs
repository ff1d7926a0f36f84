//! Run configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::extract::SelectorSet;
use crate::http_client::DEFAULT_USER_AGENT;
use crate::pacing::DEFAULT_DELAY;

/// Festival catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://www.tcbw.ee/2019/a/data/data.json";

/// Rating-site search page; `q`, `type` and `sort` are appended.
pub const DEFAULT_SEARCH_URL: &str = "https://untappd.com/search";

/// Per-request HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub catalog_url: String,
    pub search_url: String,
    pub selectors: SelectorSet,
    /// Pause after every rating lookup.
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    /// Directory the CSV is written into.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            selectors: SelectorSet::default(),
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.search_url, "https://untappd.com/search");
        assert_eq!(config.delay, Duration::from_millis(2000));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.selectors.container, ".results-container .beer-item");
    }
}
