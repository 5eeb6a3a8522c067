use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `/health` body. Fields are kept loose so that any well-formed JSON
/// decodes; only a string `"healthy"` counts as healthy.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub ollama: Option<Value>,
}

impl HealthResponse {
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().and_then(Value::as_str)
    }

    pub fn ollama_detail(&self) -> Option<String> {
        match &self.ollama {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}
