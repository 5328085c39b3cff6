use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use url::Url;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://serpapi.com/search.json";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// What the pipeline does when the search step yields no usable snippets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyContextPolicy {
    /// Ask the model anyway, with an empty context block.
    #[default]
    Proceed,
    /// Return the "no context" record without calling the model.
    Fallback,
}

impl FromStr for EmptyContextPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proceed" => Ok(Self::Proceed),
            "fallback" => Ok(Self::Fallback),
            other => Err(format!("unknown empty-context policy: {other}")),
        }
    }
}

/// Process-wide settings, read once at startup and handed to whatever needs them.
#[derive(Clone, Debug)]
pub struct ChexConfig {
    pub serpapi_api_key: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub search_endpoint: Url,
    pub gemini_endpoint: Url,
    pub search_results: u32,
    pub search_timeout: Duration,
    pub llm_timeout: Duration,
    pub empty_context_policy: EmptyContextPolicy,
}

impl Default for ChexConfig {
    fn default() -> Self {
        Self {
            serpapi_api_key: String::new(),
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            search_endpoint: default_url(DEFAULT_SEARCH_ENDPOINT),
            gemini_endpoint: default_url(DEFAULT_GEMINI_ENDPOINT),
            search_results: 6,
            search_timeout: Duration::from_secs(10),
            llm_timeout: Duration::from_secs(60),
            empty_context_policy: EmptyContextPolicy::Proceed,
        }
    }
}

impl ChexConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; bad values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            serpapi_api_key: lookup("SERPAPI_API_KEY").unwrap_or_default(),
            gemini_api_key: lookup("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: lookup("GEMINI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.gemini_model),
            search_endpoint: parsed(&lookup, "SERPAPI_ENDPOINT").unwrap_or(defaults.search_endpoint),
            gemini_endpoint: parsed(&lookup, "GEMINI_ENDPOINT").unwrap_or(defaults.gemini_endpoint),
            search_results: parsed(&lookup, "SERPAPI_NUM").unwrap_or(defaults.search_results),
            search_timeout: parsed(&lookup, "SERPAPI_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.search_timeout),
            llm_timeout: parsed(&lookup, "GEMINI_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.llm_timeout),
            empty_context_policy: parsed(&lookup, "CHEX_EMPTY_CONTEXT")
                .unwrap_or(defaults.empty_context_policy),
        }
    }

    /// Names of keys that look unset or still hold a placeholder.
    pub fn suspicious_keys(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !valid_api_key(&self.serpapi_api_key) {
            out.push("SERPAPI_API_KEY");
        }
        if !valid_api_key(&self.gemini_api_key) {
            out.push("GEMINI_API_KEY");
        }
        out
    }
}

pub fn valid_api_key(key: &str) -> bool {
    let trimmed = key.trim();
    !trimmed.is_empty() && !trimmed.contains("...")
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

fn default_url(raw: &str) -> Url {
    Url::parse(raw).unwrap_or_else(|e| panic!("built-in endpoint {raw} is invalid: {e}"))
}
