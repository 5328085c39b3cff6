use thiserror::Error;

/// Failures of the outbound collaborators. None of these reach the caller of
/// the pipeline; each one is turned into a degraded record.
#[derive(Debug, Error)]
pub enum ChexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type ChexResult<T> = Result<T, ChexError>;

/// Longest error body kept in a `Status` error.
pub const ERROR_BODY_CHARS: usize = 200;

/// Builds a `Status` error, keeping only the head of the response body.
pub fn status_error(service: &'static str, status: u16, body: &str) -> ChexError {
    ChexError::Status {
        service,
        status,
        body: body.chars().take(ERROR_BODY_CHARS).collect(),
    }
}

/// Drops the request URL from a transport error; ours carry the API key in the query.
pub fn redact(err: reqwest::Error) -> ChexError {
    ChexError::Http(err.without_url())
}
