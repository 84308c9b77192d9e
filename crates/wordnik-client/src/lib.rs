mod wordnik;

pub use wordnik::WordnikClient;

/// Data kinds requested for every searched word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Synonyms,
    Definition,
    Audio,
}

impl FetchKind {
    pub const ALL: [FetchKind; 3] = [FetchKind::Synonyms, FetchKind::Definition, FetchKind::Audio];

    pub fn as_str(&self) -> &'static str {
        match self {
            FetchKind::Synonyms => "synonyms",
            FetchKind::Definition => "definition",
            FetchKind::Audio => "audio",
        }
    }
}

/// Dictionary service interface.
///
/// Each call is independent of the others. Any HTTP response counts as a
/// payload, whatever its status; only failing to get a response is an error.
#[async_trait::async_trait]
pub trait DictionaryApi: Send + Sync {
    async fn fetch_synonyms(&self, word: &str) -> Result<RawPayload, TransportError>;

    async fn fetch_definition(&self, word: &str) -> Result<RawPayload, TransportError>;

    async fn fetch_audio(&self, word: &str) -> Result<RawPayload, TransportError>;

    async fn fetch(&self, kind: FetchKind, word: &str) -> Result<RawPayload, TransportError> {
        match kind {
            FetchKind::Synonyms => self.fetch_synonyms(word).await,
            FetchKind::Definition => self.fetch_definition(word).await,
            FetchKind::Audio => self.fetch_audio(word).await,
        }
    }
}

/// Undecoded response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    pub status: u16,
    pub body: String,
}

impl RawPayload {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Wordnik API key is not configured")]
    MissingApiKey,
}
