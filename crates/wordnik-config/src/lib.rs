use std::env;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::player::PlayerConfig;
use self::ui::UiConfig;

pub mod api;
pub mod player;
pub mod ui;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub player: PlayerConfig,
    pub ui: UiConfig,

    /// Tracing filter used when neither `--log-level` nor `RUST_LOG` is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            player: PlayerConfig::default(),
            ui: UiConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Defaults seeded from the environment
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Let `WORDNIK_*` environment variables override whatever was loaded
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| env::var(name).ok());
    }

    pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        self.api.apply_vars(&var);
        self.player.apply_vars(&var);
        if let Some(level) = var("WORDNIK_LOG") {
            self.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "api": { "api_key": "k" }, "ui": { "prompt": "> " } }"#)
                .unwrap();

        assert_eq!(config.api.api_key, "k");
        assert_eq!(config.api.base_url, "https://api.wordnik.com/v4");
        assert_eq!(config.api.synonym_limit, 10);
        assert_eq!(config.ui.prompt, "> ");
        assert_eq!(config.ui.definition_width, 60);
        assert!(!config.player.enabled);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn empty_json_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.player.program, "mpv");
        assert_eq!(config.player.args.last().map(String::as_str), Some("{url}"));
        assert_eq!(config.api.timeout_seconds, 15);
    }

    #[test]
    fn variables_override_loaded_file() {
        let mut config: Config = serde_json::from_str(
            r#"{ "api": { "api_key": "from-file" }, "player": { "program": "vlc" }, "log_level": "warn" }"#,
        )
        .unwrap();

        config.apply_vars(|name| match name {
            "WORDNIK_API_KEY" => Some("from-env".to_string()),
            "WORDNIK_PLAYER" => Some("afplay".to_string()),
            "WORDNIK_LOG" => Some("debug".to_string()),
            "WORDNIK_TIMEOUT_SECONDS" => Some("soon".to_string()),
            _ => None,
        });

        assert_eq!(config.api.api_key, "from-env");
        assert_eq!(config.api.timeout_seconds, 15);
        assert!(config.player.enabled);
        assert_eq!(config.player.program, "afplay");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn empty_player_variable_is_ignored() {
        let mut config = Config::default();
        config.apply_vars(|name| (name == "WORDNIK_PLAYER").then(String::new));
        assert!(!config.player.enabled);
        assert_eq!(config.player.program, "mpv");
    }
}
