use wordnik_types::UiEvent;

pub const HELP: &str = "Type a word and press enter to search.\n\
    :play, :p   play the pronunciation\n\
    :quit, :q   exit\n\
    :help, :h   show this help";

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Event(UiEvent),
    Help,
    Unknown(String),
    Empty,
}

/// Input the terminal answers without asking the app
#[derive(Debug, PartialEq, Eq)]
pub enum Notice {
    Help,
    Unknown(String),
    Empty,
    /// `:quit` was typed and already forwarded
    Quit,
    /// Stdin reached EOF
    Ended,
}

/// Interpret one line typed by the user
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();

    if line.is_empty() {
        return Input::Empty;
    }

    match line.strip_prefix(':') {
        Some("play" | "p") => Input::Event(UiEvent::PlayAudio),
        Some("quit" | "q") => Input::Event(UiEvent::Close),
        Some("help" | "h") => Input::Help,
        Some(other) => Input::Unknown(other.to_string()),
        None => Input::Event(UiEvent::SearchText(line.to_string())),
    }
}
