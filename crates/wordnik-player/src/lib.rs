mod command;
mod template;

pub use command::CommandPlayer;
pub use template::ArgsTemplate;

use std::sync::Arc;

use reqwest::Url;
use wordnik_config::player::PlayerConfig;

/// Pronunciation playback
#[async_trait::async_trait]
pub trait AudioPlayer: Send + Sync {
    async fn play(&self, url: &str) -> Result<(), PlayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("Invalid audio URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to start player: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Player that only reports what it would play
pub struct LogPlayer;

#[async_trait::async_trait]
impl AudioPlayer for LogPlayer {
    async fn play(&self, url: &str) -> Result<(), PlayError> {
        let url = parse_audio_url(url)?;
        tracing::info!("playing {}", url);
        Ok(())
    }
}

/// Build the player described by `config`
pub fn from_config(config: &PlayerConfig) -> Arc<dyn AudioPlayer> {
    if config.enabled {
        Arc::new(CommandPlayer::new(
            config.program.clone(),
            ArgsTemplate::new(config.args.clone()),
        ))
    } else {
        tracing::info!("Audio player disabled, playback will only be logged");
        Arc::new(LogPlayer)
    }
}

pub(crate) fn parse_audio_url(url: &str) -> Result<Url, PlayError> {
    Url::parse(url).map_err(|e| PlayError::InvalidUrl(format!("{url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_player_accepts_valid_url() {
        assert!(LogPlayer.play("https://audio/happy.mp3").await.is_ok());
    }

    #[tokio::test]
    async fn log_player_rejects_garbage() {
        let err = LogPlayer.play("not a url").await.unwrap_err();
        assert!(matches!(err, PlayError::InvalidUrl(_)));
    }
}
