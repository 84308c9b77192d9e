use wordnik_types::{AppEvent, SearchPhase, UiEvent};

use crate::render::render_deck;
use crate::state::{OutputFormat, UiState};

/// What the loop should do after an app event
#[derive(Debug, PartialEq, Eq)]
pub enum UiAction {
    Print(String),
    Close,
    Nothing,
}

pub fn handle_events(event: AppEvent, state: &mut UiState) -> UiAction {
    match event {
        AppEvent::ShowResults(view) => {
            let settled = view.phase != SearchPhase::Searching;
            tracing::debug!(
                "[UI] {} cards for '{}' ({:?})",
                view.count(),
                view.query,
                view.phase
            );

            if settled {
                let text = match state.format {
                    OutputFormat::Text => render_deck(&view, state.definition_width),
                    OutputFormat::Json => match serde_json::to_string_pretty(&view) {
                        Ok(json) => format!("{json}\n"),
                        Err(e) => {
                            tracing::error!("Failed to serialize results: {}", e);
                            String::new()
                        }
                    },
                };
                UiAction::Print(text)
            } else {
                UiAction::Nothing
            }
        }
        AppEvent::StatusUpdate { status, searching } => {
            tracing::debug!("[UI] status: {} (searching: {})", status, searching);
            match state.format {
                OutputFormat::Text => UiAction::Print(format!("{status}\n")),
                // keep stdout machine readable
                OutputFormat::Json => UiAction::Nothing,
            }
        }
        AppEvent::UiEvent(UiEvent::Close) => UiAction::Close,
        AppEvent::BackendReady => {
            tracing::debug!("[UI] Backend ready");
            UiAction::Nothing
        }
        AppEvent::UiEvent(_) => UiAction::Nothing,
    }
}
