use serde::{Deserialize, Serialize};

fn default_definition_width() -> usize {
    60
}

fn default_prompt() -> String {
    "word> ".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Column at which card definitions are wrapped
    #[serde(default = "default_definition_width")]
    pub definition_width: usize,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            definition_width: default_definition_width(),
            prompt: default_prompt(),
        }
    }
}
