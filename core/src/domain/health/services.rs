use crate::domain::{
    authentication::ports::TokenDecoder,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    storage::ports::{AssetStoragePort, StoredFileRepository},
};

impl<SF, AS, TD, HC> HealthCheckService for Service<SF, AS, TD, HC>
where
    SF: StoredFileRepository,
    AS: AssetStoragePort,
    TD: TokenDecoder,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
