//! CSS-selector extraction of search results from raw HTML.
//!
//! Everything that knows about the rating site's markup lives here: the
//! input is HTML plus a [`SelectorSet`], the output is the top
//! [`RawResult`]. Entry points are synchronous because the `scraper` types
//! are `!Send`; nothing here may be held across an `.await`.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::types::{RatingsError, RatingsResult};

/// Selectors describing one result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSet {
    /// Matches every result item.
    pub container: String,
    /// Matches the detail link inside an item.
    pub link: String,
    /// Attribute of the link element carrying the URL.
    pub link_attr: String,
    /// Matches the element whose text is the rating.
    pub rating: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            container: ".results-container .beer-item".to_string(),
            link: ".name a".to_string(),
            link_attr: "href".to_string(),
            rating: ".rating .num".to_string(),
        }
    }
}

/// One result item, before any interpretation of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult {
    pub href: Option<String>,
    /// Trimmed text content of the rating element.
    pub rating_text: Option<String>,
}

struct Compiled {
    container: Selector,
    link: Selector,
    rating: Selector,
}

impl SelectorSet {
    fn compile(&self) -> RatingsResult<Compiled> {
        Ok(Compiled {
            container: parse_selector(&self.container)?,
            link: parse_selector(&self.link)?,
            rating: parse_selector(&self.rating)?,
        })
    }
}

fn parse_selector(css: &str) -> RatingsResult<Selector> {
    Selector::parse(css)
        .map_err(|e| RatingsError::Scrape(format!("invalid selector '{css}': {e}")))
}

/// Extract only the first result item, if any.
pub fn extract_first(html: &str, selectors: &SelectorSet) -> RatingsResult<Option<RawResult>> {
    let compiled = selectors.compile()?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&compiled.container)
        .next()
        .map(|item| read_item(item, &compiled, &selectors.link_attr)))
}

fn read_item(item: ElementRef<'_>, compiled: &Compiled, link_attr: &str) -> RawResult {
    let href = item
        .select(&compiled.link)
        .next()
        .and_then(|a| a.value().attr(link_attr))
        .map(|h| h.trim().to_string());

    let rating_text = item
        .select(&compiled.rating)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string());

    RawResult { href, rating_text }
}

/// Parse a wrapped rating such as `"(4.2)"` by dropping the first and last
/// character and reading the rest as a number.
pub fn parse_rating(text: &str) -> Option<f64> {
    let mut chars = text.trim().chars();
    chars.next()?;
    chars.next_back()?;
    let inner = chars.as_str().trim();
    if inner.is_empty() {
        return None;
    }
    inner.parse::<f64>().ok().filter(|v| v.is_finite())
}
