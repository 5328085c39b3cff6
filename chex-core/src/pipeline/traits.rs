use async_trait::async_trait;

use crate::error::ChexResult;
use crate::models::{FactCheckResult, SearchHit};

/// Sampling settings sent with every generation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Low temperature, short output: favors factual over creative completions.
    pub const FACTUAL: GenerationConfig = GenerationConfig {
        temperature: 0.2,
        top_p: 1.0,
        top_k: 40,
        max_output_tokens: 512,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::FACTUAL
    }
}

#[async_trait]
pub trait EvidenceSearcher: Send + Sync {
    async fn search(&self, claim: &str) -> ChexResult<Vec<SearchHit>>;
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> ChexResult<String>;
}

/// Anything that can turn a raw claim into a result record. Never fails.
#[async_trait]
pub trait FactChecker: Send + Sync {
    async fn check(&self, raw_claim: &str) -> FactCheckResult;
}
