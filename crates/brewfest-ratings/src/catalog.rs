//! Festival catalog fetch and flattening.
//!
//! The festival publishes one JSON document shaped as
//! `{ brewer: [{ name, beer: [{ name, abv, style, stage: [..] }] }] }`.
//! Every beer becomes one [`BeerEntry`], brewers in source order and beers in
//! source order within a brewer.

use serde::Deserialize;

use crate::http_client::HttpClient;
use crate::types::{BeerEntry, RatingsError, RatingsResult};

#[derive(Debug, Deserialize)]
struct RawCatalog {
    brewer: Vec<RawBrewer>,
}

#[derive(Debug, Deserialize)]
struct RawBrewer {
    name: String,
    beer: Vec<RawBeer>,
}

#[derive(Debug, Deserialize)]
struct RawBeer {
    name: String,
    abv: f64,
    style: String,
    stage: Vec<String>,
}

/// Fetch the catalog from `url` and flatten it.
pub async fn fetch_catalog(client: &HttpClient, url: &str) -> RatingsResult<Vec<BeerEntry>> {
    let resp = client
        .get(url)
        .await
        .map_err(|e| RatingsError::Network(e.to_string()))?;

    let entries = parse_catalog(&resp.body)?;
    tracing::info!("catalog: {} beers from {}", entries.len(), resp.final_url);
    Ok(entries)
}

/// Parse and flatten a catalog document.
///
/// Any missing field is fatal; there is no partial recovery.
pub fn parse_catalog(body: &str) -> RatingsResult<Vec<BeerEntry>> {
    let raw: RawCatalog =
        serde_json::from_str(body).map_err(|e| RatingsError::Shape(e.to_string()))?;
    flatten(raw)
}

fn flatten(raw: RawCatalog) -> RatingsResult<Vec<BeerEntry>> {
    let total = raw.brewer.iter().map(|b| b.beer.len()).sum();
    let mut entries = Vec::with_capacity(total);

    for brewer in raw.brewer {
        for beer in brewer.beer {
            let day = beer.stage.into_iter().next().ok_or_else(|| {
                RatingsError::Shape(format!(
                    "beer '{}' from '{}' has an empty stage list",
                    beer.name, brewer.name
                ))
            })?;

            entries.push(BeerEntry {
                brewery: brewer.name.clone(),
                name: beer.name,
                abv: beer.abv,
                style: beer.style,
                day,
            });
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_preserves_brewer_then_beer_order() {
        let body = r#"{
            "brewer": [
                {"name": "Acme", "beer": [
                    {"name": "Lager", "abv": 5, "style": "Pale", "stage": ["Fri"]},
                    {"name": "Stout", "abv": 8.5, "style": "Imperial Stout", "stage": ["Sat", "Fri"]}
                ]},
                {"name": "Empty Kegs", "beer": []},
                {"name": "Bolt", "beer": [
                    {"name": "IPA", "abv": 6.2, "style": "IPA", "stage": ["Sat"]}
                ]}
            ]
        }"#;

        let entries = parse_catalog(body).unwrap();
        assert_eq!(entries.len(), 3);

        let names: Vec<_> = entries
            .iter()
            .map(|e| (e.brewery.as_str(), e.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("Acme", "Lager"), ("Acme", "Stout"), ("Bolt", "IPA")]
        );
        assert_eq!(entries[1].day, "Sat");
        assert_eq!(entries[1].abv, 8.5);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{
            "year": 2019,
            "brewer": [{"name": "Acme", "country": "EE", "beer": [
                {"name": "Lager", "abv": 5, "style": "Pale", "stage": ["Fri"], "ibu": 20}
            ]}]
        }"#;
        let entries = parse_catalog(body).unwrap();
        assert_eq!(entries[0].style, "Pale");
    }

    #[test]
    fn test_missing_field_is_shape_error() {
        let body = r#"{"brewer": [{"name": "Acme", "beer": [{"name": "Lager", "abv": 5}]}]}"#;
        let err = parse_catalog(body).unwrap_err();
        assert!(matches!(err, RatingsError::Shape(_)));
    }

    #[test]
    fn test_missing_brewer_list_is_shape_error() {
        let err = parse_catalog(r#"{"brewers": []}"#).unwrap_err();
        assert!(matches!(err, RatingsError::Shape(_)));
    }

    #[test]
    fn test_empty_stage_is_shape_error() {
        let body = r#"{"brewer": [{"name": "Acme", "beer": [
            {"name": "Lager", "abv": 5, "style": "Pale", "stage": []}
        ]}]}"#;
        let err = parse_catalog(body).unwrap_err();
        assert!(err.to_string().contains("empty stage list"));
    }

    #[test]
    fn test_not_json_is_shape_error() {
        let err = parse_catalog("<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, RatingsError::Shape(_)));
    }
}
