pub mod analyze_response;
pub mod health_response;
pub mod repo_scan_response;
pub mod report_detail;
