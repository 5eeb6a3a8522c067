use chrono::{DateTime, Local};
use crate::config::constants::{
    COLOR_HEALTHY, COLOR_PENDING, COLOR_UNHEALTHY, STATUS_HEALTHY_TEXT, STATUS_PENDING_TEXT, STATUS_UNHEALTHY_TEXT,
    STATUS_UNREACHABLE_TEXT,
};
use crate::enums::health_status::HealthStatus;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub text: &'static str,
    pub color: &'static str,
    pub detail: Option<String>,
    pub checked_at: Option<DateTime<Local>>,
}

impl StatusIndicator {
    pub fn pending() -> Self {
        Self {
            text: STATUS_PENDING_TEXT,
            color: COLOR_PENDING,
            detail: None,
            checked_at: None,
        }
    }

    pub fn render(status: HealthStatus, detail: Option<String>, checked_at: DateTime<Local>) -> Self {
        let (text, color) = match status {
            HealthStatus::Healthy => (STATUS_HEALTHY_TEXT, COLOR_HEALTHY),
            HealthStatus::Unhealthy => (STATUS_UNHEALTHY_TEXT, COLOR_UNHEALTHY),
            HealthStatus::Unreachable => (STATUS_UNREACHABLE_TEXT, COLOR_UNHEALTHY),
        };

        Self {
            text,
            color,
            detail,
            checked_at: Some(checked_at),
        }
    }
}
