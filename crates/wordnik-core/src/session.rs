/// State of the word currently on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    /// Last submitted word, empty when no search is active
    pub query: String,
    /// Synonyms in API order
    pub synonyms: Vec<String>,
    /// Empty when unavailable or not loaded yet
    pub definition_text: String,
    pub audio_reference: Option<String>,
}

impl SearchSession {
    /// Start describing `query`, dropping everything known about the previous word
    pub(crate) fn begin(&mut self, query: String) {
        self.query = query;
        self.synonyms.clear();
        self.definition_text.clear();
        self.audio_reference = None;
    }
}
