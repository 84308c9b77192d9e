use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.wordnik.com/v4".to_string()
}

fn default_synonym_limit() -> u32 {
    10
}

fn default_timeout_seconds() -> u64 {
    15
}

/// Wordnik REST API settings
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Maximum synonyms requested per word
    #[serde(default = "default_synonym_limit")]
    pub synonym_limit: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            synonym_limit: default_synonym_limit(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ApiConfig {
    /// Override fields from `WORDNIK_*` variables found by `var`
    pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(key) = var("WORDNIK_API_KEY") {
            self.api_key = key;
        }
        if let Some(url) = var("WORDNIK_API_URL") {
            self.base_url = url;
        }
        if let Some(timeout) = var("WORDNIK_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.timeout_seconds = timeout;
        }
    }
}
