use thiserror::Error;

/// Service-layer error taxonomy. Chat failures are converted to the
/// `{"error": ...}` envelope at the handler boundary instead of an HTTP
/// error status; the frontend checks for the `error` key.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("LLM error: {0}")]
    LlmError(String),
}
