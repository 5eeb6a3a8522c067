use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use crate::config::constants::{
    ANALYZE_ENDPOINT, ANALYZE_REPO_ENDPOINT, HEALTH_ENDPOINT, REPORTS_ENDPOINT, REPORT_ENDPOINT,
};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::repo_scan_request::RepoScanRequest;
use crate::structs::report_summary::ReportSummary;
use crate::structs::wire::analyze_response::AnalyzeResponse;
use crate::structs::wire::health_response::HealthResponse;
use crate::structs::wire::repo_scan_response::RepoScanResponse;
use crate::structs::wire::report_detail::ReportDetail;
use crate::traits::backend_client::BackendClient;

/// `BackendClient` over HTTP. One attempt per call, no timeout.
#[derive(Clone)]
pub struct HttpBackend {
    base_url: Url,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> AnalyzerResult<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            AnalyzerError::config_error(
                &format!("Invalid backend URL '{}': {}", base_url, e),
                Some("backend.base_url"),
                None,
            )
        })?;

        // joined endpoints must extend the base path, not replace its last segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> AnalyzerResult<Url> {
        self.base_url.join(name).map_err(|e| {
            AnalyzerError::network_error(name, Some(self.base_url.as_str()), &e.to_string())
        })
    }

    fn report_url(&self, path: &str) -> AnalyzerResult<Url> {
        let mut url = self.endpoint(REPORT_ENDPOINT)?;
        url.path_segments_mut()
            .map_err(|_| AnalyzerError::network_error("fetch report", Some(self.base_url.as_str()), "base URL cannot carry a path"))?
            .extend(path.split('/'));
        Ok(url)
    }

    /// Decodes the body whatever the status code; the backend reports its
    /// own failures inside JSON.
    async fn decode<T: DeserializeOwned>(&self, operation: &str, response: reqwest::Response) -> AnalyzerResult<T> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.bytes().await.map_err(|e| AnalyzerError::NetworkError {
            operation: operation.to_string(),
            url: Some(url.clone()),
            status_code: Some(status.as_u16()),
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            log::debug!("{} answered HTTP {} ({} bytes)", url, status, body.len());
        }

        serde_json::from_slice(&body).map_err(|e| AnalyzerError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(e.line()),
            reason: e.to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, operation: &str, url: Url) -> AnalyzerResult<T> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AnalyzerError::network_error(operation, Some(url.as_str()), &e.to_string()))?;

        self.decode(operation, response).await
    }

    async fn post<B: serde::Serialize + Sync, T: DeserializeOwned>(&self, operation: &str, url: Url, body: &B) -> AnalyzerResult<T> {
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(url.clone())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AnalyzerError::network_error(operation, Some(url.as_str()), &e.to_string()))?;

        self.decode(operation, response).await
    }
}

#[async_trait]
impl BackendClient for HttpBackend {
    async fn health(&self) -> AnalyzerResult<HealthResponse> {
        let url = self.endpoint(HEALTH_ENDPOINT)?;
        self.get("health check", url).await
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AnalyzerResult<AnalyzeResponse> {
        let url = self.endpoint(ANALYZE_ENDPOINT)?;
        self.post("analyze snippet", url, request).await
    }

    async fn analyze_repo(&self, request: &RepoScanRequest) -> AnalyzerResult<RepoScanResponse> {
        let url = self.endpoint(ANALYZE_REPO_ENDPOINT)?;
        self.post("scan repository", url, request).await
    }

    async fn list_reports(&self) -> AnalyzerResult<Vec<ReportSummary>> {
        let url = self.endpoint(REPORTS_ENDPOINT)?;
        self.get("list reports", url).await
    }

    async fn fetch_report(&self, path: &str) -> AnalyzerResult<ReportDetail> {
        let url = self.report_url(path)?;
        self.get("fetch report", url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() {
        let backend = HttpBackend::new("http://localhost:5001").unwrap();
        assert_eq!(backend.endpoint(HEALTH_ENDPOINT).unwrap().as_str(), "http://localhost:5001/health");

        let prefixed = HttpBackend::new("http://example.com/web").unwrap();
        assert_eq!(prefixed.endpoint(ANALYZE_REPO_ENDPOINT).unwrap().as_str(), "http://example.com/web/analyze-repo");
    }

    #[test]
    fn report_paths_keep_their_segments() {
        let backend = HttpBackend::new("http://localhost:5001/").unwrap();
        let url = backend.report_url("2024/quality_report one.md").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5001/report/2024/quality_report%20one.md");
    }

    #[test]
    fn rejects_unparsable_base_url() {
        assert!(matches!(
            HttpBackend::new("localhost 5001"),
            Err(AnalyzerError::ConfigurationError { .. })
        ));
    }
}
