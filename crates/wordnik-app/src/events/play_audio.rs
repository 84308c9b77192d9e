use kanal::AsyncSender;
use wordnik_types::AppEvent;

use crate::events::{LoopState, send_status};
use crate::search_context::SearchContext;

pub async fn handle_play_audio(
    context: &SearchContext,
    state: &LoopState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let session = state.aggregator.session();

    let Some(url) = session.audio_reference.as_deref() else {
        tracing::info!("No audio to play for '{}'", session.query);
        return send_status(app_to_ui_tx, "No audio available".to_string(), false).await;
    };

    match context.player.play(url).await {
        Ok(()) => {
            tracing::info!("playing {}", url);
        }
        Err(e) => {
            tracing::error!("Failed to play {}: {}", url, e);
            send_status(app_to_ui_tx, format!("Cannot play audio: {e}"), false).await?;
        }
    }

    Ok(())
}
