pub mod analysis_view;
pub mod button_view;
pub mod modal_view;
pub mod repo_scan_view;
pub mod status_indicator;
