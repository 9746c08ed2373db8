use crate::domain::{
    authentication::ports::TokenDecoder, health::ports::HealthCheckRepository,
    storage::ports::{AssetStoragePort, StoredFileRepository},
};

/// Aggregate that carries every adapter the domain services need.
#[derive(Debug, Clone)]
pub struct Service<SF, AS, TD, HC>
where
    SF: StoredFileRepository,
    AS: AssetStoragePort,
    TD: TokenDecoder,
    HC: HealthCheckRepository,
{
    pub(crate) stored_file_repository: SF,
    pub(crate) asset_storage: AS,
    pub(crate) token_decoder: TD,
    pub(crate) health_check_repository: HC,
}

impl<SF, AS, TD, HC> Service<SF, AS, TD, HC>
where
    SF: StoredFileRepository,
    AS: AssetStoragePort,
    TD: TokenDecoder,
    HC: HealthCheckRepository,
{
    pub fn new(
        stored_file_repository: SF,
        asset_storage: AS,
        token_decoder: TD,
        health_check_repository: HC,
    ) -> Self {
        Self {
            stored_file_repository,
            asset_storage,
            token_decoder,
            health_check_repository,
        }
    }
}
