use wordnik_client::TransportError;

/// Outcome of a single failed fetch
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Payload was well formed but held nothing for the word
    #[error("Nothing found")]
    NotFound,
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
