//! Reconciles the three independently arriving fetch results of a search
//! into one [`SearchSession`].
//!
//! Every `submit` opens a new [`Generation`]. Completions carry the
//! generation they were dispatched for and anything older than the current
//! one is dropped, so repeating the same word still disambiguates correctly.
//! The aggregator is not synchronised; its owner must funnel all completions
//! through one place.

use wordnik_client::FetchKind;
use wordnik_types::{SearchPhase, ViewData};

use crate::error::FetchError;
use crate::fetch::{Completion, FetchResult};
use crate::session::SearchSession;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Handle for the fetches of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: Generation,
    pub query: String,
}

#[derive(Debug, Default)]
pub struct SearchResultAggregator {
    session: SearchSession,
    generation: Generation,
    pending: Vec<FetchKind>,
    phase: SearchPhase,
}

impl SearchResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Start a search for `query`.
    ///
    /// Returns `None` for an empty query. Otherwise every earlier ticket goes
    /// stale and the returned ticket should be used to dispatch the synonyms,
    /// definition and audio fetches.
    pub fn submit(&mut self, query: &str) -> Option<SearchTicket> {
        if query.is_empty() {
            return None;
        }

        self.generation = self.generation.next();
        self.session.begin(query.to_string());
        self.pending = FetchKind::ALL.to_vec();
        self.phase = SearchPhase::Searching;

        tracing::debug!("search #{} started for '{}'", self.generation.value(), query);

        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Route a completion to its handler. Returns false when it was discarded.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let Completion {
            generation,
            query,
            result,
        } = completion;

        match result {
            FetchResult::Synonyms(result) => self.on_synonyms_fetched(generation, &query, result),
            FetchResult::Definition(result) => {
                self.on_definition_fetched(generation, &query, result)
            }
            FetchResult::Audio(result) => self.on_audio_fetched(generation, &query, result),
        }
    }

    pub fn on_synonyms_fetched(
        &mut self,
        generation: Generation,
        query: &str,
        result: Result<Vec<String>, FetchError>,
    ) -> bool {
        if !self.accept(generation, FetchKind::Synonyms, query) {
            return false;
        }

        match result {
            Ok(synonyms) => {
                tracing::debug!("{} synonyms for '{}'", synonyms.len(), query);
                self.session.synonyms = synonyms;
            }
            Err(FetchError::Parse(e)) => {
                // The only path that also resets the search word
                tracing::error!("Parsing error for '{}' synonyms: {}", query, e);
                self.session.query.clear();
                self.session.synonyms.clear();
            }
            Err(FetchError::NotFound) => {
                tracing::info!("No synonyms found for '{}'", query);
            }
            Err(e @ FetchError::Transport(_)) => {
                tracing::error!("Synonyms request for '{}' failed: {}", query, e);
            }
        }

        true
    }

    pub fn on_definition_fetched(
        &mut self,
        generation: Generation,
        query: &str,
        result: Result<String, FetchError>,
    ) -> bool {
        if !self.accept(generation, FetchKind::Definition, query) {
            return false;
        }

        match result {
            Ok(text) => {
                self.session.definition_text = text;
            }
            Err(FetchError::NotFound) => {
                tracing::info!("Cannot find definition of '{}'", query);
                self.session.definition_text.clear();
            }
            Err(FetchError::Parse(e)) => {
                tracing::error!("Parsing error for '{}' definition: {}", query, e);
                self.session.definition_text.clear();
            }
            Err(e @ FetchError::Transport(_)) => {
                tracing::error!("Definition request for '{}' failed: {}", query, e);
            }
        }

        true
    }

    pub fn on_audio_fetched(
        &mut self,
        generation: Generation,
        query: &str,
        result: Result<String, FetchError>,
    ) -> bool {
        if !self.accept(generation, FetchKind::Audio, query) {
            return false;
        }

        match result {
            Ok(url) => {
                tracing::debug!("audio for '{}': {}", query, url);
                self.session.audio_reference = Some(url);
            }
            Err(e) => {
                tracing::warn!("No audio for '{}': {}", query, e);
            }
        }

        true
    }

    /// Snapshot for rendering
    pub fn projection(&self) -> ViewData {
        ViewData {
            query: self.session.query.clone(),
            synonyms: self.session.synonyms.clone(),
            definition_text: self.session.definition_text.clone(),
            audio_reference: self.session.audio_reference.clone(),
            phase: self.phase,
        }
    }

    /// Generation gate; also settles the phase once nothing is pending
    fn accept(&mut self, generation: Generation, kind: FetchKind, query: &str) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "discarding stale {} for '{}' (#{} < #{})",
                kind.as_str(),
                query,
                generation.value(),
                self.generation.value()
            );
            return false;
        }

        let Some(pos) = self.pending.iter().position(|k| *k == kind) else {
            tracing::warn!("duplicate {} completion for search #{}", kind.as_str(), generation.value());
            return false;
        };
        self.pending.swap_remove(pos);

        if self.pending.is_empty() {
            self.phase = SearchPhase::Populated;
        }

        true
    }
}
