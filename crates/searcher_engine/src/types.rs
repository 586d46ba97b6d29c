use serde_json::Value;
use thiserror::Error;

/// A backend search result row: field names to primitive values, with the
/// schema fixed per deployment.
pub type TorRecord = serde_json::Map<String, Value>;

/// Events surfaced by the engine to the UI pump.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        query: String,
        result: Result<Vec<TorRecord>, SearchError>,
    },
}

/// Failure of a single backend search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}
