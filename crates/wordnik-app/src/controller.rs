use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordnik_client::DictionaryApi;
use wordnik_core::Completion;
use wordnik_player::AudioPlayer;
use wordnik_types::AppEvent;
use wordnik_ui::UiOptions;

use crate::events::event_loop;
use crate::search_context::SearchContext;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub completions: (AsyncSender<Completion>, AsyncReceiver<Completion>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
            // three per search, room for a few superseded searches
            completions: kanal::bounded_async(32),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        api: Arc<dyn DictionaryApi>,
        player: Arc<dyn AudioPlayer>,
        ui_options: UiOptions,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let context = SearchContext::new(api, player, self.channels.completions.0.clone());

        // Event loop
        tasks.spawn(event_loop(
            context,
            self.channels.ui_to_app.1.clone(),
            self.channels.completions.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.state.config.clone(),
            ui_options,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
