use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    #[serde(default = "ConfigHelper::default_language")]
    pub default_language: String,

    #[serde(default = "ConfigHelper::default_languages")]
    pub languages: Vec<String>,

    #[serde(default)]
    pub show_raw_markdown: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_language: ConfigHelper::default_language(),
            languages: ConfigHelper::default_languages(),
            show_raw_markdown: false,
        }
    }
}
