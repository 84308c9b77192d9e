use std::sync::Arc;

use kanal::AsyncSender;
use wordnik_client::DictionaryApi;
use wordnik_core::Completion;
use wordnik_player::AudioPlayer;

/// Collaborators the event loop needs to run searches and play audio
#[derive(Clone)]
pub struct SearchContext {
    pub api: Arc<dyn DictionaryApi>,
    pub player: Arc<dyn AudioPlayer>,
    /// Where fetch tasks report back
    pub completion_tx: AsyncSender<Completion>,
}

impl SearchContext {
    pub fn new(
        api: Arc<dyn DictionaryApi>,
        player: Arc<dyn AudioPlayer>,
        completion_tx: AsyncSender<Completion>,
    ) -> Self {
        Self {
            api,
            player,
            completion_tx,
        }
    }
}
