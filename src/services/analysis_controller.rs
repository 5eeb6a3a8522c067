use std::sync::{Arc, Mutex};
use uuid::Uuid;
use crate::config::constants::{
    ANALYZE_BUSY_LABEL, ANALYZE_FAILED_PREFIX, ANALYZE_IDLE_LABEL, EMPTY_CODE_MESSAGE, REQUEST_FAILED_PREFIX,
};
use crate::enums::control_state::ControlState;
use crate::enums::region::Region;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::busy_guard::BusyGuard;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::view::analysis_view::AnalysisView;
use crate::structs::view::button_view::{ButtonLabels, ButtonView};
use crate::traits::backend_client::BackendClient;
use crate::traits::user_notifier::UserNotifier;

const LABELS: ButtonLabels = ButtonLabels {
    idle: ANALYZE_IDLE_LABEL,
    busy: ANALYZE_BUSY_LABEL,
};

#[derive(Debug, Default)]
struct ResultRegion {
    visible: bool,
    html: Option<String>,
    markdown: Option<String>,
}

/// Drives one "analyze code" submission at a time.
///
/// Nothing stops a second `submit` while one is pending; the later-arriving
/// response overwrites the result region.
pub struct AnalysisController {
    backend: Arc<dyn BackendClient>,
    notifier: Arc<dyn UserNotifier>,
    control: Mutex<ControlState>,
    region: Mutex<ResultRegion>,
}

impl AnalysisController {
    pub fn new(backend: Arc<dyn BackendClient>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self {
            backend,
            notifier,
            control: Mutex::new(ControlState::Idle),
            region: Mutex::new(ResultRegion::default()),
        }
    }

    /// Validates, dispatches and renders. Every outcome is surfaced to the
    /// user before this returns; the `Result` is for callers that need to
    /// know which one happened.
    pub async fn submit(&self, code: &str, language: &str) -> AnalyzerResult<AnalysisResult> {
        if code.trim().is_empty() {
            self.notifier.alert(EMPTY_CODE_MESSAGE);
            return Err(AnalyzerError::validation_error("code", code, "code must not be empty", None));
        }

        let mut guard = BusyGuard::engage(&self.control);
        let request_id = Uuid::new_v4();
        let request = AnalysisRequest::new(code, language);
        log::debug!("[{}] analyze: {} bytes of {}", request_id, code.len(), language);

        match self.backend.analyze(&request).await {
            Ok(response) => {
                let result = AnalysisResult::from(response);
                match &result {
                    AnalysisResult::Success { renderable_content, markdown } => {
                        log::debug!("[{}] analysis succeeded", request_id);
                        {
                            let mut region = self.region.lock().unwrap_or_else(|e| e.into_inner());
                            region.html = Some(renderable_content.clone());
                            region.markdown = markdown.clone();
                            region.visible = true;
                        }
                        self.notifier.reveal(Region::AnalysisResult);
                        guard.settle(ControlState::Succeeded);
                    }
                    AnalysisResult::Failure { message } => {
                        log::debug!("[{}] analysis rejected: {}", request_id, message);
                        self.notifier.alert(&format!("{}: {}", ANALYZE_FAILED_PREFIX, message));
                        guard.settle(ControlState::Failed(message.clone()));
                    }
                }
                Ok(result)
            }
            Err(e) => {
                log::warn!("[{}] analysis request failed: {}", request_id, e.detail());
                self.notifier.alert(&format!("{}: {}", REQUEST_FAILED_PREFIX, e.detail()));
                guard.settle(ControlState::Failed(e.detail()));
                Err(e)
            }
        }
    }

    pub fn state(&self) -> ControlState {
        self.control.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn view(&self) -> AnalysisView {
        let region = self.region.lock().unwrap_or_else(|e| e.into_inner());
        AnalysisView {
            button: ButtonView::render(&self.state(), LABELS),
            result_visible: region.visible,
            result_html: region.html.clone(),
            result_markdown: region.markdown.clone(),
        }
    }
}
