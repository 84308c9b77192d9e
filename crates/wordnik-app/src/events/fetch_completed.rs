use kanal::AsyncSender;
use wordnik_core::{Completion, FetchError, FetchResult};
use wordnik_types::{AppEvent, SearchPhase};

use crate::events::{LoopControl, LoopState, close_ui, send_status};

/// Status line for failures worth telling the user about
fn failure_notice(completion: &Completion) -> Option<String> {
    let query = &completion.query;
    match &completion.result {
        FetchResult::Synonyms(Err(FetchError::Parse(_))) => {
            Some(format!("Could not read synonyms for '{query}'"))
        }
        FetchResult::Synonyms(Err(e @ FetchError::Transport(_)))
        | FetchResult::Definition(Err(e @ FetchError::Transport(_)))
        | FetchResult::Audio(Err(e @ FetchError::Transport(_))) => Some(format!(
            "{} lookup for '{query}' failed: {e}",
            completion.result.kind().as_str()
        )),
        _ => None,
    }
}

pub async fn handle_fetch_completed(
    state: &mut LoopState,
    completion: Completion,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<LoopControl> {
    let notice = failure_notice(&completion);

    if !state.aggregator.apply(completion) {
        return Ok(LoopControl::Continue);
    }

    let view = state.aggregator.projection();
    let searching = view.phase == SearchPhase::Searching;

    if let Some(notice) = notice {
        send_status(app_to_ui_tx, notice, searching).await?;
    }
    app_to_ui_tx.send(AppEvent::ShowResults(view)).await?;

    if state.close_when_settled && !searching {
        close_ui(app_to_ui_tx).await;
        return Ok(LoopControl::Exit);
    }

    Ok(LoopControl::Continue)
}
