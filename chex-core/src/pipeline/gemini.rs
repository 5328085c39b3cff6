//! Text generation over the Gemini `generateContent` REST endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use url::Url;

use crate::config::ChexConfig;
use crate::error::{redact, status_error, ChexError, ChexResult};
use crate::pipeline::traits::{GenerationConfig, TextGenerator};

pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl From<&GenerationConfig> for GeminiGenerationConfig {
    fn from(cfg: &GenerationConfig) -> Self {
        Self {
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            top_k: cfg.top_k,
            max_output_tokens: cfg.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
}

impl GeminiClient {
    pub fn new(config: &ChexConfig) -> ChexResult<Self> {
        let client = Client::builder().timeout(config.llm_timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.gemini_endpoint.clone(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        })
    }

    fn method_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.as_str().trim_end_matches('/'),
            self.model
        )
    }

    /// Pulls the first candidate's text out of a raw response body.
    fn extract_text(body: &str) -> ChexResult<String> {
        let response: GeminiResponse = serde_json::from_str(body)?;
        if let Some(usage) = &response.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                response_tokens = ?usage.candidates_token_count,
                "Gemini usage"
            );
        }

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ChexError::InvalidResponse("no candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(ChexError::InvalidResponse(format!(
                "candidate has no text (finish reason: {reason})"
            )));
        }
        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> ChexResult<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: config.into(),
        };

        info!(model = %self.model, "sending request to Gemini");
        let response = self
            .client
            .post(self.method_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        let body = response.text().await.map_err(redact)?;
        if !status.is_success() {
            error!(%status, "Gemini API error");
            return Err(status_error("Gemini API", status.as_u16(), &body));
        }
        Self::extract_text(&body)
    }
}
