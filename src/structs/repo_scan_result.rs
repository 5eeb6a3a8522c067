use crate::config::constants::UNKNOWN_ERROR_MESSAGE;
use crate::structs::wire::repo_scan_response::RepoScanResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoScanResult {
    Success {
        files: Vec<String>,
        total_count: usize,
    },
    Failure {
        message: String,
    },
}

impl RepoScanResult {
    /// Files the backend counted but did not enumerate.
    pub fn remainder(&self) -> usize {
        match self {
            Self::Success { files, total_count } => total_count.saturating_sub(files.len()),
            Self::Failure { .. } => 0,
        }
    }
}

impl From<RepoScanResponse> for RepoScanResult {
    fn from(response: RepoScanResponse) -> Self {
        match (response.success, response.files) {
            (true, Some(files)) => {
                // keep total_count >= files.len() even if the backend under-reports
                let total_count = response.total.unwrap_or(files.len()).max(files.len());
                Self::Success { files, total_count }
            }
            _ => Self::Failure {
                message: response.error.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            },
        }
    }
}
