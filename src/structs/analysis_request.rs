use serde::{Deserialize, Serialize};
use crate::config::constants::ANALYSIS_MODE_BASIC;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
    #[serde(rename = "type")]
    pub mode: String,
}

impl AnalysisRequest {
    pub fn new(code: &str, language: &str) -> Self {
        Self {
            code: code.to_string(),
            language: language.to_string(),
            mode: ANALYSIS_MODE_BASIC.to_string(),
        }
    }
}
