use serde::{Deserialize, Serialize};

/// Snippets at or below this many characters carry too little to ground a verdict.
pub const MIN_SNIPPET_CHARS: usize = 20;
/// Upper bound on snippets handed to the model.
pub const MAX_SNIPPETS: usize = 3;

/// One organic result as returned by the search collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl SearchHit {
    pub fn from_snippet(snippet: impl Into<String>) -> Self {
        Self {
            snippet: snippet.into(),
            ..Self::default()
        }
    }
}

/// A trimmed snippet that passed the length and truncation checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvidenceSnippet {
    pub text: String,
    /// Zero-based rank of the hit this snippet came from.
    pub rank: usize,
}

impl EvidenceSnippet {
    pub fn new(raw: &str, rank: usize) -> Option<Self> {
        let text = raw.trim();
        if text.chars().count() <= MIN_SNIPPET_CHARS || Self::is_truncated(text) {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            rank,
        })
    }

    fn is_truncated(text: &str) -> bool {
        text.ends_with("...") || text.ends_with('\u{2026}')
    }
}

/// Up to [`MAX_SNIPPETS`] valid snippets in search-rank order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvidenceSet {
    snippets: Vec<EvidenceSnippet>,
}

impl EvidenceSet {
    pub fn from_hits(hits: &[SearchHit]) -> Self {
        let snippets = hits
            .iter()
            .enumerate()
            .filter_map(|(rank, hit)| EvidenceSnippet::new(&hit.snippet, rank))
            .take(MAX_SNIPPETS)
            .collect();
        Self { snippets }
    }

    pub fn snippets(&self) -> &[EvidenceSnippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// The context block fed to the prompt: one `- ` bullet per snippet.
    pub fn render(&self) -> String {
        self.snippets
            .iter()
            .map(|s| format!("- {}", s.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
