use std::sync::{Arc, Mutex};
use crate::enums::tab::Tab;
use crate::services::report_collection::ReportCollection;

pub struct TabRouter {
    active: Mutex<Tab>,
    reports: Arc<ReportCollection>,
}

impl TabRouter {
    pub fn new(initial: Tab, reports: Arc<ReportCollection>) -> Self {
        Self {
            active: Mutex::new(initial),
            reports,
        }
    }

    /// Activates `tab` and deactivates every other. Entering the reports
    /// tab reloads the collection, even if it was already active.
    pub async fn select(&self, tab: Tab) {
        *self.active.lock().unwrap_or_else(|e| e.into_inner()) = tab;
        log::debug!("Switched to tab {}", tab.name());

        if tab == Tab::Reports {
            // failures are rendered by the collection itself
            let _ = self.reports.load().await;
        }
    }

    pub fn active(&self) -> Tab {
        *self.active.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Every tab with its active flag, in display order.
    pub fn panes(&self) -> Vec<(Tab, bool)> {
        let active = self.active();
        Tab::ALL.iter().map(|tab| (*tab, *tab == active)).collect()
    }
}
