use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-repo`, for any status code.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoScanResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}
