use serde::{Deserialize, Serialize};
use crate::enums::report_category::ReportCategory;

/// One entry of `/reports`, in backend order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "path")]
    pub identifier: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "type")]
    pub category: ReportCategory,
    #[serde(rename = "modified")]
    pub modified_timestamp: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
}
