use serde::{Deserialize, Serialize};

/// Lifecycle of the search session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// At least one fetch of the current search is outstanding
    Searching,
    /// Every fetch of the current search has completed
    Populated,
}

/// Read-only snapshot of the search session handed to the presentation layer.
///
/// One card is rendered per synonym; every card carries the searched word and
/// the shared definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewData {
    pub query: String,
    pub synonyms: Vec<String>,
    pub definition_text: String,
    pub audio_reference: Option<String>,
    pub phase: SearchPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymCard<'a> {
    pub word: &'a str,
    pub query: &'a str,
    pub definition_text: &'a str,
}

impl ViewData {
    /// Number of cards in the deck
    pub fn count(&self) -> usize {
        self.synonyms.len()
    }

    /// Card at `index`, `None` past the end of the deck
    pub fn item_at(&self, index: usize) -> Option<SynonymCard<'_>> {
        self.synonyms.get(index).map(|word| SynonymCard {
            word,
            query: &self.query,
            definition_text: &self.definition_text,
        })
    }

    pub fn items(&self) -> impl Iterator<Item = SynonymCard<'_>> {
        (0..self.count()).filter_map(|i| self.item_at(i))
    }

    pub fn has_audio(&self) -> bool {
        self.audio_reference.is_some()
    }
}
