use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use wordnik_config::Config;
use wordnik_types::AppEvent;
use wordnik_ui::UiOptions;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    options: UiOptions,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    wordnik_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config, options, cancel).await
}
