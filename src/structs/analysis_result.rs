use crate::config::constants::UNKNOWN_ERROR_MESSAGE;
use crate::structs::wire::analyze_response::AnalyzeResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    Success {
        renderable_content: String,
        markdown: Option<String>,
    },
    Failure {
        message: String,
    },
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(response: AnalyzeResponse) -> Self {
        match (response.success, response.html) {
            (true, Some(html)) if !html.is_empty() => Self::Success {
                renderable_content: html,
                markdown: response.analysis,
            },
            _ => Self::Failure {
                message: response.error.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_html_is_not_a_success() {
        let result = AnalysisResult::from(AnalyzeResponse {
            success: true,
            html: Some(String::new()),
            analysis: Some("# ok".into()),
            error: None,
        });
        assert_eq!(result, AnalysisResult::Failure { message: "未知错误".into() });
    }
}
