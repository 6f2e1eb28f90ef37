use crate::domain::{common::CoreError, health::entities::IsHealthy};

pub trait HealthRepository: Send + Sync {
    /// Probes the backing store. Connectivity failures are reported as
    /// `IsHealthy(false)` rather than as an error.
    fn ping(&self) -> impl Future<Output = IsHealthy> + Send;
}

pub trait HealthService: Send + Sync {
    fn check_health(&self) -> impl Future<Output = Result<IsHealthy, CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockHealthRepository {
    healthy: bool,
}

impl MockHealthRepository {
    pub fn new() -> Self {
        Self { healthy: true }
    }

    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

impl HealthRepository for MockHealthRepository {
    async fn ping(&self) -> IsHealthy {
        IsHealthy::new(self.healthy)
    }
}
