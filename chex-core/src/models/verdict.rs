use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Verdict {
    Real,
    Fake,
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Real => "REAL",
            Verdict::Fake => "FAKE",
            Verdict::Unknown => "UNKNOWN",
        }
    }

    /// Lenient mapping of model text onto the closed vocabulary.
    pub fn parse(raw: &str) -> Verdict {
        let cleaned = raw.trim_matches(|c: char| !c.is_alphanumeric());
        match cleaned.to_uppercase().as_str() {
            "REAL" => Verdict::Real,
            "FAKE" => Verdict::Fake,
            _ => Verdict::Unknown,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record returned to callers. Every field is always present; fields the
/// model never produced stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckResult {
    pub verdict: String,
    pub score: String,
    pub reasoning: String,
    pub evidence: String,
    pub warnings: String,
}

impl FactCheckResult {
    /// Degraded record for a claim the web search could not ground.
    pub fn no_context() -> Self {
        Self {
            verdict: Verdict::Unknown.to_string(),
            score: "0".to_string(),
            reasoning: "No context available from web.".to_string(),
            evidence: String::new(),
            warnings: "Web search failed or returned no useful data.".to_string(),
        }
    }

    /// Degraded record for a failed model call; `detail` lands in `warnings`.
    pub fn llm_failure(detail: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Unknown.to_string(),
            score: "0".to_string(),
            reasoning: "Gemini API call failed.".to_string(),
            evidence: String::new(),
            warnings: detail.into(),
        }
    }

    pub fn verdict_kind(&self) -> Verdict {
        Verdict::parse(&self.verdict)
    }
}
