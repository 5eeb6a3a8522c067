use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Unreachable,
}

impl HealthStatus {
    /// Maps the `status` field of a well-formed `/health` body.
    pub fn from_status_field(status: Option<&str>) -> Self {
        match status {
            Some("healthy") => Self::Healthy,
            _ => Self::Unhealthy,
        }
    }
}
