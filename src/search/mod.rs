//! LibAnswers search API client.
//!
//! One GET per search. The query is appended to the configured base URL as-is
//! and only `iid` and `limit` travel as query parameters.

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::UpstreamResponse;

/// Upstream statuses that carry a usable body.
const ACCEPTED_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::PARTIAL_CONTENT];

/// HTTP client bound to one LibAnswers site.
#[derive(Debug, Clone)]
pub struct LibAnswersClient {
    http: Client,
    api_base: String,
    site_id: String,
}

impl LibAnswersClient {
    /// Build a client with the configured timeout.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self::with_client(http, config))
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            api_base: config.api_base.clone(),
            site_id: config.site_id.clone(),
        }
    }

    /// Full search URL for an already translated query.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}{}", self.api_base, query)
    }

    /// Run one search against the upstream API.
    pub async fn search(&self, query: &str, limit: i64) -> Result<UpstreamResponse, AppError> {
        let url = self.search_url(query);
        let limit = limit.to_string();
        let params = [("iid", self.site_id.as_str()), ("limit", limit.as_str())];

        let response = match self.http.get(&url).query(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Search error at url {}, params={:?}: {}", url, params, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !ACCEPTED_STATUSES.contains(&status) {
            tracing::error!("Received {} with q={}", status.as_u16(), query);
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                query: query.to_string(),
            });
        }

        tracing::debug!("Submitted url={}, params={:?}", url, params);
        tracing::debug!("Received response {}", status.as_u16());

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read upstream body for q={}: {}", query, e);
            AppError::from(e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Upstream sent invalid JSON for q={}: {}", query, e);
            AppError::UpstreamPayload {
                query: query.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(api_base: &str) -> Config {
        Config {
            api_base: api_base.to_string(),
            site_id: "1234".to_string(),
            no_results_url: "https://faq.example.edu/ask".to_string(),
            module_url: "https://faq.example.edu/search/?q=".to_string(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            upstream_timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn test_search_url_is_plain_concatenation() {
        let client =
            LibAnswersClient::new(&config("https://faq.example.edu/api/1.1/search/")).unwrap();
        assert_eq!(
            client.search_url("renew+a+book"),
            "https://faq.example.edu/api/1.1/search/renew+a+book"
        );
    }

    #[test]
    fn test_search_url_base_with_query_string() {
        let client = LibAnswersClient::new(&config("https://faq.example.edu/search?q=")).unwrap();
        assert_eq!(
            client.search_url("hours"),
            "https://faq.example.edu/search?q=hours"
        );
    }

    #[tokio::test]
    async fn test_unparseable_url_is_transport_error() {
        let client = LibAnswersClient::new(&config("not a url/")).unwrap();
        let err = client.search("hours", 3).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamTransport(_)));
        assert_eq!(err.message(), "Search error");
    }
}
