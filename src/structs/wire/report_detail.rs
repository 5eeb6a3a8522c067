use serde::{Deserialize, Serialize};

/// Body of `GET /report/{path}`. Only `html` is needed to render; the rest
/// is informational.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDetail {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReportDetail {
    /// Renderable content, if the backend sent a non-empty `html` field.
    pub fn renderable_content(&self) -> Option<&str> {
        self.html.as_deref().filter(|html| !html.is_empty())
    }
}
