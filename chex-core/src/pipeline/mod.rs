pub mod check;
pub mod fetch;
pub mod gemini;
pub mod mock;
pub mod parse;
pub mod prompt;
pub mod select;
pub mod traits;

pub use check::FactCheckPipeline;
pub use fetch::SerpApiSearcher;
pub use gemini::GeminiClient;
pub use mock::{FailingGenerator, FailingSearcher, ScriptedGenerator, StaticSearcher};
pub use parse::parse;
pub use prompt::build_prompt;
pub use select::{fetch_context, select_evidence};
pub use traits::{EvidenceSearcher, FactChecker, GenerationConfig, TextGenerator};
