use std::sync::Arc;

use kanal::AsyncSender;
use tokio::task::JoinHandle;
use wordnik_client::{DictionaryApi, FetchKind};

use crate::aggregator::{Generation, SearchTicket};
use crate::decode::{decode_audio, decode_definition, decode_synonyms};
use crate::error::FetchError;

/// Decoded result of one fetch
#[derive(Debug)]
pub enum FetchResult {
    Synonyms(Result<Vec<String>, FetchError>),
    Definition(Result<String, FetchError>),
    Audio(Result<String, FetchError>),
}

impl FetchResult {
    pub fn kind(&self) -> FetchKind {
        match self {
            FetchResult::Synonyms(_) => FetchKind::Synonyms,
            FetchResult::Definition(_) => FetchKind::Definition,
            FetchResult::Audio(_) => FetchKind::Audio,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            FetchResult::Synonyms(r) => r.is_ok(),
            FetchResult::Definition(r) | FetchResult::Audio(r) => r.is_ok(),
        }
    }
}

/// Message sent back to the aggregator's owner when a fetch finishes
#[derive(Debug)]
pub struct Completion {
    pub generation: Generation,
    pub query: String,
    pub result: FetchResult,
}

/// Request and decode one kind of data for `word`
pub async fn run_fetch(api: &dyn DictionaryApi, kind: FetchKind, word: &str) -> FetchResult {
    let payload = api.fetch(kind, word).await.map_err(FetchError::from);
    if let Ok(p) = &payload
        && !p.is_success()
    {
        tracing::debug!("{} lookup for '{}' answered HTTP {}", kind.as_str(), word, p.status);
    }

    match kind {
        FetchKind::Synonyms => {
            FetchResult::Synonyms(payload.and_then(|p| decode_synonyms(&p.body)))
        }
        FetchKind::Definition => {
            FetchResult::Definition(payload.and_then(|p| decode_definition(&p.body)))
        }
        FetchKind::Audio => FetchResult::Audio(payload.and_then(|p| decode_audio(&p.body))),
    }
}

/// Fan a ticket out into three independent fetch tasks.
///
/// Results come back on `completion_tx` in whatever order they finish.
/// Nothing is cancelled when the ticket goes stale; the aggregator drops
/// late completions instead.
pub fn spawn_fetches(
    api: Arc<dyn DictionaryApi>,
    ticket: &SearchTicket,
    completion_tx: &AsyncSender<Completion>,
) -> Vec<JoinHandle<()>> {
    FetchKind::ALL
        .into_iter()
        .map(|kind| {
            let api = api.clone();
            let tx = completion_tx.clone();
            let ticket = ticket.clone();

            tokio::spawn(async move {
                let result = run_fetch(api.as_ref(), kind, &ticket.query).await;
                tracing::debug!(
                    "{} fetch for '{}' finished (ok: {})",
                    kind.as_str(),
                    ticket.query,
                    result.is_ok()
                );

                let completion = Completion {
                    generation: ticket.generation,
                    query: ticket.query,
                    result,
                };
                if let Err(e) = tx.send(completion).await {
                    tracing::debug!("completion channel closed: {}", e);
                }
            })
        })
        .collect()
}
