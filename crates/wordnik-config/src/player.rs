use serde::{Deserialize, Serialize};

fn default_args() -> Vec<String> {
    vec!["--no-video".to_string(), "--really-quiet".to_string(), "{url}".to_string()]
}

/// External audio player used for pronunciations
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn `program` on play; when false playback is only logged
    #[serde(default)]
    pub enabled: bool,
    pub program: String,
    /// Arguments passed to `program`, `{url}` is replaced by the audio URL
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            program: "mpv".to_string(),
            args: default_args(),
        }
    }
}

impl PlayerConfig {
    /// A non-empty `WORDNIK_PLAYER` names the program and turns playback on
    pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(program) = var("WORDNIK_PLAYER").filter(|p| !p.is_empty()) {
            self.enabled = true;
            self.program = program;
        }
    }
}
