use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoScanRequest {
    pub repo_path: String,
}

impl RepoScanRequest {
    pub fn new(repo_path: &str) -> Self {
        Self { repo_path: repo_path.to_string() }
    }
}
