use std::sync::{Arc, Mutex};
use crate::enums::click_target::ClickTarget;
use crate::structs::view::modal_view::{ModalBody, ModalView};
use crate::traits::backend_client::BackendClient;

/// Modal showing one report. The detail is fetched on every open, never
/// cached.
pub struct ReportViewer {
    backend: Arc<dyn BackendClient>,
    modal: Mutex<ModalView>,
}

impl ReportViewer {
    pub fn new(backend: Arc<dyn BackendClient>) -> Self {
        Self {
            backend,
            modal: Mutex::new(ModalView::default()),
        }
    }

    /// Shows the modal with a loading placeholder, then fills it in. If the
    /// modal was closed meanwhile the content still lands, just unseen.
    pub async fn open(&self, identifier: &str) -> ModalBody {
        {
            let mut modal = self.modal.lock().unwrap_or_else(|e| e.into_inner());
            modal.visible = true;
            modal.title = identifier.to_string();
            modal.body = ModalBody::Loading;
        }

        let body = match self.backend.fetch_report(identifier).await {
            Ok(detail) => match detail.renderable_content() {
                Some(html) => ModalBody::Content(html.to_string()),
                None => {
                    log::warn!("Report {} came back without content", identifier);
                    ModalBody::Failed(detail.error)
                }
            },
            Err(e) => {
                log::warn!("Report {} could not be fetched: {}", identifier, e.detail());
                ModalBody::Failed(Some(e.detail()))
            }
        };

        self.modal.lock().unwrap_or_else(|e| e.into_inner()).body = body.clone();
        body
    }

    pub fn close(&self) {
        self.modal.lock().unwrap_or_else(|e| e.into_inner()).visible = false;
    }

    /// Close button and backdrop close the modal; clicks on the content do
    /// not. Returns whether the click closed it.
    pub fn handle_click(&self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::CloseButton | ClickTarget::Backdrop => {
                self.close();
                true
            }
            ClickTarget::Content => false,
        }
    }

    pub fn view(&self) -> ModalView {
        self.modal.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
