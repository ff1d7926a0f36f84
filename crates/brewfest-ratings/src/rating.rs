//! Rating lookup against the beverage-rating site's search page.

use async_trait::async_trait;
use url::Url;

use crate::extract::{extract_first, parse_rating, SelectorSet};
use crate::http_client::HttpClient;
use crate::types::{BeerEntry, RatingMatch, RatingsError, RatingsResult};

/// Anything that can answer "what is the top rating match for this beer?".
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// `Ok(None)` means the search came back empty.
    async fn lookup(&self, beer: &BeerEntry) -> RatingsResult<Option<RatingMatch>>;
}

/// Scrapes the search results page of the rating site.
#[derive(Clone)]
pub struct RatingScraper {
    client: HttpClient,
    search_url: String,
    selectors: SelectorSet,
}

impl RatingScraper {
    pub fn new(client: HttpClient, search_url: &str, selectors: SelectorSet) -> Self {
        Self {
            client,
            search_url: search_url.to_string(),
            selectors,
        }
    }

    /// Build `<search_url>?q=<brewery name>&type=beer&sort=all`.
    pub fn search_url_for(&self, beer: &BeerEntry) -> RatingsResult<Url> {
        let query = beer.search_query();
        Url::parse_with_params(
            &self.search_url,
            &[("q", query.as_str()), ("type", "beer"), ("sort", "all")],
        )
        .map_err(|e| RatingsError::Scrape(format!("bad search url '{}': {e}", self.search_url)))
    }
}

#[async_trait]
impl RatingSource for RatingScraper {
    async fn lookup(&self, beer: &BeerEntry) -> RatingsResult<Option<RatingMatch>> {
        let url = self.search_url_for(beer)?;
        let resp = self
            .client
            .get(url.as_str())
            .await
            .map_err(|e| RatingsError::Scrape(e.to_string()))?;

        let Some(first) = extract_first(&resp.body, &self.selectors)? else {
            tracing::debug!("no rating match for '{}'", beer.search_query());
            return Ok(None);
        };

        Ok(Some(to_match(beer, first.href, first.rating_text)))
    }
}

/// Interpret the top result. A missing link or rating leaves that field
/// empty; the match itself is kept.
fn to_match(beer: &BeerEntry, href: Option<String>, rating_text: Option<String>) -> RatingMatch {
    let untappd_href = href.filter(|h| !h.is_empty());
    if untappd_href.is_none() {
        tracing::warn!("top result for '{}' has no link", beer.search_query());
    }

    let untappd_rating = rating_text.as_deref().and_then(parse_rating);
    if untappd_rating.is_none() {
        tracing::warn!(
            "unparsable rating {:?} for '{}'",
            rating_text.as_deref().unwrap_or(""),
            beer.search_query()
        );
    }

    RatingMatch {
        untappd_href,
        untappd_rating,
    }
}
