pub mod analysis_request;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod repo_scan_request;
pub mod repo_scan_result;
pub mod report_card;
pub mod report_summary;
pub mod search_filter_state;
pub mod view;
pub mod wire;
