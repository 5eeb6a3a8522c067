use std::sync::{Arc, Mutex};
use std::time::Duration;
use chrono::Local;
use tokio::task::JoinHandle;
use crate::enums::health_status::HealthStatus;
use crate::structs::view::status_indicator::StatusIndicator;
use crate::traits::backend_client::BackendClient;

pub struct HealthMonitor {
    backend: Arc<dyn BackendClient>,
    indicator: Mutex<StatusIndicator>,
    interval: Duration,
}

impl HealthMonitor {
    pub fn new(backend: Arc<dyn BackendClient>, interval: Duration) -> Self {
        Self {
            backend,
            indicator: Mutex::new(StatusIndicator::pending()),
            interval,
        }
    }

    /// One request to the health endpoint; updates the indicator.
    pub async fn probe(&self) -> HealthStatus {
        let (status, detail) = match self.backend.health().await {
            Ok(response) => (HealthStatus::from_status_field(response.status_text()), response.ollama_detail()),
            Err(e) => {
                log::warn!("Health probe failed: {}", e.detail());
                (HealthStatus::Unreachable, None)
            }
        };

        log::debug!("Health probe: {:?}", status);
        *self.indicator.lock().unwrap_or_else(|e| e.into_inner()) = StatusIndicator::render(status, detail, Local::now());
        status
    }

    pub fn indicator(&self) -> StatusIndicator {
        self.indicator.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Probes now and then on every interval tick, forever. Each tick runs
    /// as its own task, so a slow probe does not delay the next one.
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<()> {
        let monitor = Arc::clone(self);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(monitor.interval);
            loop {
                ticker.tick().await;
                let tick = Arc::clone(&monitor);
                tokio::spawn(async move {
                    tick.probe().await;
                });
            }
        })
    }
}
