use std::sync::{Arc, Mutex};
use uuid::Uuid;
use crate::config::constants::{
    remainder_line, EMPTY_REPO_PATH_MESSAGE, REQUEST_FAILED_PREFIX, SCAN_BUSY_LABEL, SCAN_FAILED_PREFIX,
    SCAN_IDLE_LABEL,
};
use crate::enums::control_state::ControlState;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::busy_guard::BusyGuard;
use crate::structs::repo_scan_request::RepoScanRequest;
use crate::structs::repo_scan_result::RepoScanResult;
use crate::structs::view::button_view::{ButtonLabels, ButtonView};
use crate::structs::view::repo_scan_view::RepoScanView;
use crate::traits::backend_client::BackendClient;
use crate::traits::user_notifier::UserNotifier;

const LABELS: ButtonLabels = ButtonLabels {
    idle: SCAN_IDLE_LABEL,
    busy: SCAN_BUSY_LABEL,
};

#[derive(Debug, Default)]
struct FileListRegion {
    visible: bool,
    files: Vec<String>,
    remainder: usize,
}

/// Same lifecycle as the analysis controller, for repository paths. The
/// path is not checked locally; the backend decides whether it exists.
pub struct RepoScanController {
    backend: Arc<dyn BackendClient>,
    notifier: Arc<dyn UserNotifier>,
    control: Mutex<ControlState>,
    region: Mutex<FileListRegion>,
}

impl RepoScanController {
    pub fn new(backend: Arc<dyn BackendClient>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self {
            backend,
            notifier,
            control: Mutex::new(ControlState::Idle),
            region: Mutex::new(FileListRegion::default()),
        }
    }

    pub async fn submit(&self, repo_path: &str) -> AnalyzerResult<RepoScanResult> {
        if repo_path.trim().is_empty() {
            self.notifier.alert(EMPTY_REPO_PATH_MESSAGE);
            return Err(AnalyzerError::validation_error("repo_path", repo_path, "repository path must not be empty", None));
        }

        let mut guard = BusyGuard::engage(&self.control);
        let request_id = Uuid::new_v4();
        log::debug!("[{}] scan repository: {}", request_id, repo_path);

        match self.backend.analyze_repo(&RepoScanRequest::new(repo_path)).await {
            Ok(response) => {
                let result = RepoScanResult::from(response);
                match &result {
                    RepoScanResult::Success { files, total_count } => {
                        log::debug!("[{}] scan listed {} of {} files", request_id, files.len(), total_count);
                        let mut region = self.region.lock().unwrap_or_else(|e| e.into_inner());
                        region.files = files.clone();
                        region.remainder = result.remainder();
                        region.visible = true;
                        guard.settle(ControlState::Succeeded);
                    }
                    RepoScanResult::Failure { message } => {
                        self.notifier.alert(&format!("{}: {}", SCAN_FAILED_PREFIX, message));
                        guard.settle(ControlState::Failed(message.clone()));
                    }
                }
                Ok(result)
            }
            Err(e) => {
                log::warn!("[{}] scan request failed: {}", request_id, e.detail());
                self.notifier.alert(&format!("{}: {}", REQUEST_FAILED_PREFIX, e.detail()));
                guard.settle(ControlState::Failed(e.detail()));
                Err(e)
            }
        }
    }

    pub fn state(&self) -> ControlState {
        self.control.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn view(&self) -> RepoScanView {
        let region = self.region.lock().unwrap_or_else(|e| e.into_inner());
        let mut lines = region.files.clone();
        if region.remainder > 0 {
            lines.push(remainder_line(region.remainder));
        }

        RepoScanView {
            button: ButtonView::render(&self.state(), LABELS),
            files_visible: region.visible,
            lines,
        }
    }
}
