use std::sync::Arc;
use crate::config::constants::health_interval;
use crate::enums::tab::Tab;
use crate::services::analysis_controller::AnalysisController;
use crate::services::health_monitor::HealthMonitor;
use crate::services::repo_scan_controller::RepoScanController;
use crate::services::report_collection::ReportCollection;
use crate::services::report_viewer::ReportViewer;
use crate::services::tab_router::TabRouter;
use crate::structs::config::config::Config;
use crate::traits::backend_client::BackendClient;
use crate::traits::user_notifier::UserNotifier;

/// Every controller, wired to one backend and one notifier. Controllers
/// share nothing mutable with each other.
pub struct Dashboard {
    pub health: Arc<HealthMonitor>,
    pub analysis: Arc<AnalysisController>,
    pub repo_scan: Arc<RepoScanController>,
    pub reports: Arc<ReportCollection>,
    pub viewer: Arc<ReportViewer>,
    pub router: Arc<TabRouter>,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn BackendClient>, notifier: Arc<dyn UserNotifier>, config: &Config) -> Self {
        let viewer = Arc::new(ReportViewer::new(Arc::clone(&backend)));
        let reports = Arc::new(ReportCollection::new(Arc::clone(&backend), Arc::clone(&viewer)));

        Self {
            health: Arc::new(HealthMonitor::new(
                Arc::clone(&backend),
                health_interval(config.backend.health_interval_secs),
            )),
            analysis: Arc::new(AnalysisController::new(Arc::clone(&backend), Arc::clone(&notifier))),
            repo_scan: Arc::new(RepoScanController::new(Arc::clone(&backend), notifier)),
            router: Arc::new(TabRouter::new(Tab::default(), Arc::clone(&reports))),
            reports,
            viewer,
        }
    }
}
