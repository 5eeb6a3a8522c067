use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_HEALTH_INTERVAL_SECS, DEFAULT_LANGUAGE};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_health_interval_secs() -> u64 {
        DEFAULT_HEALTH_INTERVAL_SECS
    }

    pub fn default_language() -> String {
        DEFAULT_LANGUAGE.to_string()
    }

    pub fn default_languages() -> Vec<String> {
        vec![
            "java".to_string(),
            "python".to_string(),
            "javascript".to_string(),
            "go".to_string(),
            "rust".to_string(),
        ]
    }
}
