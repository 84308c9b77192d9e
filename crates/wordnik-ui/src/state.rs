/// How the deck is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Startup options for the terminal front end
#[derive(Debug, Clone, Default)]
pub struct UiOptions {
    /// Search this word, print the result and exit without reading stdin
    pub word: Option<String>,
    pub format: OutputFormat,
}

/// UI-specific state (separate from the search session)
pub struct UiState {
    pub format: OutputFormat,
    pub definition_width: usize,
    pub prompt: Option<String>,
}

impl UiState {
    pub fn new(format: OutputFormat, definition_width: usize, prompt: Option<String>) -> Self {
        Self {
            format,
            definition_width,
            prompt,
        }
    }
}
