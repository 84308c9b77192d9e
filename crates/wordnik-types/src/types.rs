use crate::view::ViewData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Fresh projection of the search session
    ShowResults(ViewData),
    StatusUpdate {
        status: String,
        searching: bool,
    },
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchText(String),
    PlayAudio,
    /// No more searches will be typed; close once the current one settles
    EndOfInput,
    Close,
}
