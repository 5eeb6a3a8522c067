pub mod analysis_controller;
pub mod busy_guard;
pub mod dashboard;
pub mod health_monitor;
pub mod http_backend;
pub mod repo_scan_controller;
pub mod report_collection;
pub mod report_viewer;
pub mod tab_router;
