use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::ChexConfig;
use crate::error::{redact, status_error, ChexResult};
use crate::models::SearchHit;
use crate::pipeline::traits::EvidenceSearcher;

/// Web search over SerpAPI's JSON endpoint.
pub struct SerpApiSearcher {
    client: Client,
    endpoint: Url,
    api_key: String,
    num: u32,
}

#[derive(Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SearchHit>,
}

impl SerpApiSearcher {
    pub fn new(config: &ChexConfig) -> ChexResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("chex/", env!("CARGO_PKG_VERSION")))
            .timeout(config.search_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.search_endpoint.clone(),
            api_key: config.serpapi_api_key.clone(),
            num: config.search_results,
        })
    }

    fn decode(body: &str) -> ChexResult<Vec<SearchHit>> {
        let parsed: SerpApiResponse = serde_json::from_str(body)?;
        Ok(parsed.organic_results)
    }
}

#[async_trait]
impl EvidenceSearcher for SerpApiSearcher {
    async fn search(&self, claim: &str) -> ChexResult<Vec<SearchHit>> {
        debug!(endpoint = %self.endpoint, "querying search API");
        let num = self.num.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", claim),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        let body = response.text().await.map_err(redact)?;
        debug!(%status, bytes = body.len(), "search API responded");
        if !status.is_success() {
            return Err(status_error("search API", status.as_u16(), &body));
        }
        Self::decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChexError;

    #[test]
    fn decodes_organic_results() {
        let body = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {"position": 1, "title": "A", "link": "https://a.example", "snippet": "First snippet"},
                {"position": 2, "title": "B", "link": "https://b.example"}
            ]
        }"#;
        let hits = SerpApiSearcher::decode(body).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].snippet, "First snippet");
        assert_eq!(hits[1].snippet, "");
        assert_eq!(hits[1].link.as_deref(), Some("https://b.example"));
    }

    #[test]
    fn missing_results_array_is_empty() {
        let hits = SerpApiSearcher::decode(r#"{"error": "no results"}"#).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(matches!(
            SerpApiSearcher::decode("<html>"),
            Err(ChexError::Json(_))
        ));
    }

    #[test]
    fn builds_from_config() {
        let searcher = SerpApiSearcher::new(&ChexConfig::default()).unwrap();
        assert_eq!(searcher.num, 6);
        assert_eq!(searcher.endpoint.as_str(), crate::config::DEFAULT_SEARCH_ENDPOINT);
    }
}
