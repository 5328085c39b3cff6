pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;

pub use config::{ChexConfig, EmptyContextPolicy};
pub use error::{ChexError, ChexResult};
pub use models::{normalize, Claim, EvidenceSet, FactCheckResult, SearchHit, Verdict};
pub use pipeline::{FactCheckPipeline, FactChecker};
