use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordnik_core::{Completion, SearchResultAggregator};
use wordnik_types::{AppEvent, SearchPhase, UiEvent};

use crate::search_context::SearchContext;

pub mod fetch_completed;
pub mod play_audio;
pub mod search_text;

use fetch_completed::handle_fetch_completed;
use play_audio::handle_play_audio;
use search_text::handle_search_text;

/// Search state owned by the event loop
#[derive(Default)]
pub struct LoopState {
    pub aggregator: SearchResultAggregator,
    /// Input has ended; exit as soon as the current search settles
    pub close_when_settled: bool,
}

impl LoopState {
    fn settled(&self) -> bool {
        self.aggregator.phase() != SearchPhase::Searching
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// App's main loop.
///
/// UI events and fetch completions are handled one at a time here, which is
/// what keeps updates to the search session from interleaving.
pub async fn event_loop(
    context: SearchContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    completion_rx: AsyncReceiver<Completion>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut state = LoopState::default();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");

    loop {
        let control = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                LoopControl::Exit
            }
            event = ui_to_app_rx.recv() => {
                let event = event?;
                tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
                handle_events(&context, &mut state, &app_to_ui_tx, event).await?
            }
            completion = completion_rx.recv() => {
                let completion = completion?;
                handle_fetch_completed(&mut state, completion, &app_to_ui_tx).await?
            }
        };

        if control == LoopControl::Exit {
            return Ok(());
        }
    }
}

async fn handle_events(
    context: &SearchContext,
    state: &mut LoopState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<LoopControl> {
    match event {
        AppEvent::UiEvent(UiEvent::SearchText(text)) => {
            handle_search_text(context, state, text, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::PlayAudio) => {
            handle_play_audio(context, state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::EndOfInput) => {
            if state.settled() {
                close_ui(app_to_ui_tx).await;
                return Ok(LoopControl::Exit);
            }
            tracing::debug!("[EVENT_LOOP] Input ended, waiting for the search to settle");
            state.close_when_settled = true;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::info!("[EVENT_LOOP] UI closed");
            return Ok(LoopControl::Exit);
        }
        AppEvent::ShowResults(_) | AppEvent::StatusUpdate { .. } | AppEvent::BackendReady => {
            // UI-bound events, ignore in backend
        }
    }

    Ok(LoopControl::Continue)
}

/// Ask the UI to exit; it may already be gone
pub(crate) async fn close_ui(app_to_ui_tx: &AsyncSender<AppEvent>) {
    if let Err(e) = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await {
        tracing::debug!("UI already closed: {}", e);
    }
}

pub(crate) async fn send_status(
    app_to_ui_tx: &AsyncSender<AppEvent>,
    status: String,
    searching: bool,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::StatusUpdate { status, searching })
        .await?;
    Ok(())
}
