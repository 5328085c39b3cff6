use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ChexError, ChexResult};
use crate::models::SearchHit;
use crate::pipeline::traits::{EvidenceSearcher, GenerationConfig, TextGenerator};

/// Returns the same hits for every claim.
pub struct StaticSearcher {
    hits: Vec<SearchHit>,
}

impl StaticSearcher {
    pub fn new<I, S>(snippets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hits: snippets.into_iter().map(SearchHit::from_snippet).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { hits: Vec::new() }
    }
}

#[async_trait]
impl EvidenceSearcher for StaticSearcher {
    async fn search(&self, _claim: &str) -> ChexResult<Vec<SearchHit>> {
        Ok(self.hits.clone())
    }
}

pub struct FailingSearcher {
    message: String,
}

impl FailingSearcher {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl EvidenceSearcher for FailingSearcher {
    async fn search(&self, _claim: &str) -> ChexResult<Vec<SearchHit>> {
        Err(ChexError::InvalidResponse(self.message.clone()))
    }
}

/// Replies with a fixed completion and remembers every prompt it was given.
pub struct ScriptedGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _config: &GenerationConfig) -> ChexResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.reply.clone())
    }
}

pub struct FailingGenerator {
    error: fn() -> ChexError,
}

impl FailingGenerator {
    pub fn new(error: fn() -> ChexError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str, _config: &GenerationConfig) -> ChexResult<String> {
        Err((self.error)())
    }
}
