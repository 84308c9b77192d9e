use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{ArgsTemplate, AudioPlayer, PlayError, parse_audio_url};

/// Plays audio by spawning an external program such as `mpv`
#[derive(Clone)]
pub struct CommandPlayer {
    program: String,
    args: ArgsTemplate,
}

impl CommandPlayer {
    pub fn new(program: String, args: ArgsTemplate) -> Self {
        Self { program, args }
    }
}

#[async_trait]
impl AudioPlayer for CommandPlayer {
    /// Start playback and return; the child is reaped in the background
    async fn play(&self, url: &str) -> Result<(), PlayError> {
        let url = parse_audio_url(url)?;
        let args = self.args.render(url.as_str());

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        tracing::info!("playing {} with {}", url, self.program);

        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    tracing::debug!("{} finished", program);
                }
                Ok(status) => tracing::warn!("{} exited with {}", program, status),
                Err(e) => tracing::error!("Failed to wait for {}: {}", program, e),
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let player = CommandPlayer::new(
            "wordnik-player-does-not-exist".to_string(),
            ArgsTemplate::new(vec!["{url}".to_string()]),
        );

        let err = player.play("https://audio/happy.mp3").await.unwrap_err();
        assert!(matches!(err, PlayError::Spawn(_)));
    }

    #[tokio::test]
    async fn url_is_validated_before_spawning() {
        let player = CommandPlayer::new("true".to_string(), ArgsTemplate::new(vec![]));

        let err = player.play("::").await.unwrap_err();
        assert!(matches!(err, PlayError::InvalidUrl(_)));
    }
}
