use crate::domain::{
    common::{CoreError, services::Service},
    health::{
        entities::IsHealthy,
        port::{HealthRepository, HealthService},
    },
    message::ports::MessageRepository,
};

impl<M, H> HealthService for Service<M, H>
where
    M: MessageRepository,
    H: HealthRepository,
{
    async fn check_health(&self) -> Result<IsHealthy, CoreError> {
        self.health_repository.ping().await.to_result()
    }
}
