use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::{ChexConfig, EmptyContextPolicy};
use crate::models::{Claim, FactCheckResult};
use crate::pipeline::parse::parse;
use crate::pipeline::prompt::build_prompt;
use crate::pipeline::select::fetch_context;
use crate::pipeline::traits::{EvidenceSearcher, FactChecker, GenerationConfig, TextGenerator};

/// Normalize, search, prompt, generate, parse. Each call is independent; the
/// pipeline holds no per-request state.
pub struct FactCheckPipeline<S, G>
where
    S: EvidenceSearcher,
    G: TextGenerator,
{
    pub searcher: S,
    pub generator: G,
    pub generation: GenerationConfig,
    pub empty_context: EmptyContextPolicy,
}

impl<S, G> FactCheckPipeline<S, G>
where
    S: EvidenceSearcher,
    G: TextGenerator,
{
    pub fn new(searcher: S, generator: G) -> Self {
        Self {
            searcher,
            generator,
            generation: GenerationConfig::FACTUAL,
            empty_context: EmptyContextPolicy::Proceed,
        }
    }

    pub fn with_config(searcher: S, generator: G, config: &ChexConfig) -> Self {
        Self {
            empty_context: config.empty_context_policy,
            ..Self::new(searcher, generator)
        }
    }

    pub async fn run(&self, raw_claim: &str) -> FactCheckResult {
        let claim = Claim::new(raw_claim);
        info!(claim = %claim, "checking claim");

        let context = fetch_context(&self.searcher, claim.as_str()).await;
        if context.is_empty() {
            match self.empty_context {
                EmptyContextPolicy::Fallback => {
                    warn!("no usable web context, returning fallback record");
                    return FactCheckResult::no_context();
                }
                EmptyContextPolicy::Proceed => {
                    warn!("no usable web context, asking the model without it");
                }
            }
        }

        let prompt = build_prompt(claim.as_str(), &context);
        debug!(prompt_len = prompt.len(), "prepared prompt");
        debug!("{prompt}");

        let started = Instant::now();
        let result = match self.generator.generate(&prompt, &self.generation).await {
            Ok(text) => {
                info!(elapsed_ms = started.elapsed().as_millis() as u64, "model responded");
                parse(text.trim())
            }
            Err(e) => {
                warn!(error = %e, "model call failed");
                FactCheckResult::llm_failure(e.to_string())
            }
        };

        info!(verdict = %result.verdict_kind(), score = %result.score, "claim checked");
        result
    }
}

#[async_trait]
impl<S, G> FactChecker for FactCheckPipeline<S, G>
where
    S: EvidenceSearcher,
    G: TextGenerator,
{
    async fn check(&self, raw_claim: &str) -> FactCheckResult {
        self.run(raw_claim).await
    }
}
