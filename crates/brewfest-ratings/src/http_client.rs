//! Async HTTP client wrapping reqwest.
//!
//! Single GET per call: follows redirects, enforces a timeout, and treats any
//! non-2xx status as a failure. There is no retry or backoff here; pacing is
//! the caller's job.

use std::time::Duration;

use crate::types::FetchError;

/// Desktop browser user-agent used unless the caller overrides it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

/// Response from an HTTP GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Final URL after redirects.
    pub final_url: String,
    /// Response body as text.
    pub body: String,
}

/// HTTP client shared by the catalog fetcher and the rating scraper.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with the given per-request timeout and user-agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET and return the body of a successful response.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        tracing::debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let final_url = resp.url().to_string();

        let body = resp.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        Ok(HttpResponse { final_url, body })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(15), DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hello"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hi there"))
            .mount(&server)
            .await;

        let client = HttpClient::default();
        let url = format!("{}/hello", server.uri());
        let resp = client.get(&url).await.unwrap();
        assert_eq!(resp.body, "hi there");
        assert_eq!(resp.final_url, url);
    }

    #[tokio::test]
    async fn test_final_url_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2019/data.json"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/moved.json", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/moved.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = HttpClient::default();
        let resp = client
            .get(&format!("{}/2019/data.json", server.uri()))
            .await
            .unwrap();
        assert_eq!(resp.final_url, format!("{}/moved.json", server.uri()));
        assert_eq!(resp.body, "{}");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = HttpClient::default();
        let err = client
            .get(&format!("{}/limited", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = HttpClient::new(Duration::from_millis(500), DEFAULT_USER_AGENT);
        let err = client.get("http://127.0.0.1:1/nothing").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
