pub mod claim;
pub mod evidence;
pub mod verdict;

pub use claim::{normalize, Claim};
pub use evidence::{EvidenceSet, EvidenceSnippet, SearchHit, MAX_SNIPPETS, MIN_SNIPPET_CHARS};
pub use verdict::{FactCheckResult, Verdict};
