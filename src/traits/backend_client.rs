use async_trait::async_trait;
use crate::errors::AnalyzerResult;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::repo_scan_request::RepoScanRequest;
use crate::structs::report_summary::ReportSummary;
use crate::structs::wire::analyze_response::AnalyzeResponse;
use crate::structs::wire::health_response::HealthResponse;
use crate::structs::wire::repo_scan_response::RepoScanResponse;
use crate::structs::wire::report_detail::ReportDetail;

/// The analysis web service. Implementations return the decoded body for
/// any status code; `Err` means the call produced no decodable answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn health(&self) -> AnalyzerResult<HealthResponse>;

    async fn analyze(&self, request: &AnalysisRequest) -> AnalyzerResult<AnalyzeResponse>;

    async fn analyze_repo(&self, request: &RepoScanRequest) -> AnalyzerResult<RepoScanResponse>;

    async fn list_reports(&self) -> AnalyzerResult<Vec<ReportSummary>>;

    async fn fetch_report(&self, path: &str) -> AnalyzerResult<ReportDetail>;
}
