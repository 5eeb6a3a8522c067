use serde::{Deserialize, Serialize};
use crate::structs::config::backend_config::BackendConfig;
use crate::structs::config::console_config::ConsoleConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub console: ConsoleConfig,
}
