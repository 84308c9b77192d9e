use kanal::AsyncSender;
use wordnik_core::preprocess::{DefaultPreprocessor, Preprocessor};
use wordnik_core::spawn_fetches;
use wordnik_types::AppEvent;

use crate::events::{LoopState, send_status};
use crate::search_context::SearchContext;

pub async fn handle_search_text(
    context: &SearchContext,
    state: &mut LoopState,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let query = DefaultPreprocessor.process(&text);
    tracing::debug!("Normalized: '{}'", query);

    let Some(ticket) = state.aggregator.submit(&query) else {
        tracing::debug!("Empty search ignored");
        return send_status(app_to_ui_tx, "Type any word".to_string(), false).await;
    };

    tracing::info!("Searching '{}' (#{})", ticket.query, ticket.generation.value());
    spawn_fetches(context.api.clone(), &ticket, &context.completion_tx);

    send_status(app_to_ui_tx, format!("Searching '{}'...", ticket.query), true).await?;
    app_to_ui_tx
        .send(AppEvent::ShowResults(state.aggregator.projection()))
        .await?;

    Ok(())
}
