use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use wordnik_config::api::ApiConfig;

use crate::{DictionaryApi, FetchKind, RawPayload, TransportError};

#[derive(Clone)]
pub struct WordnikClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    synonym_limit: u32,
}

impl WordnikClient {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            synonym_limit: config.synonym_limit,
        })
    }

    /// `{base}/word.json/{word}/{endpoint}` with the word as an encoded path segment
    fn endpoint_url(&self, kind: FetchKind, word: &str) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        let endpoint = match kind {
            FetchKind::Synonyms => "relatedWords",
            FetchKind::Definition => "definitions",
            FetchKind::Audio => "audio",
        };

        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["word.json", word, endpoint]);

        let params: Vec<(&str, String)> = match kind {
            FetchKind::Synonyms => vec![
                ("useCanonical", "false".to_string()),
                ("relationshipTypes", "synonym".to_string()),
                ("limitPerRelationshipType", self.synonym_limit.to_string()),
            ],
            FetchKind::Definition => vec![
                ("limit", "1".to_string()),
                ("includeRelated", "false".to_string()),
                ("useCanonical", "false".to_string()),
                ("includeTags", "false".to_string()),
            ],
            FetchKind::Audio => vec![
                ("useCanonical", "false".to_string()),
                ("limit", "1".to_string()),
            ],
        };

        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("api_key", &self.api_key);

        Ok(url)
    }

    async fn request(&self, kind: FetchKind, word: &str) -> Result<RawPayload, TransportError> {
        if self.api_key.is_empty() {
            return Err(TransportError::MissingApiKey);
        }

        let url = self.endpoint_url(kind, word)?;
        tracing::debug!("GET {} for '{}'", kind.as_str(), word);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Wordnik {} request for '{}' returned HTTP {}", kind.as_str(), word, status);
        }

        Ok(RawPayload {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl DictionaryApi for WordnikClient {
    async fn fetch_synonyms(&self, word: &str) -> Result<RawPayload, TransportError> {
        self.request(FetchKind::Synonyms, word).await
    }

    async fn fetch_definition(&self, word: &str) -> Result<RawPayload, TransportError> {
        self.request(FetchKind::Definition, word).await
    }

    async fn fetch_audio(&self, word: &str) -> Result<RawPayload, TransportError> {
        self.request(FetchKind::Audio, word).await
    }
}
