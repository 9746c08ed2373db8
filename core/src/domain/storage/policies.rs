use std::future::Future;

use crate::domain::{
    authentication::{ports::TokenDecoder, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
};

use super::ports::{AssetStoragePort, StoredFileRepository};

/// Policy trait for file storage operations
pub trait FilePolicy: Send + Sync {
    /// Check if the identity can write into the public upload directory
    fn can_upload_asset(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

impl<SF, AS, TD, HC> FilePolicy for Service<SF, AS, TD, HC>
where
    SF: StoredFileRepository,
    AS: AssetStoragePort,
    TD: TokenDecoder,
    HC: HealthCheckRepository,
{
    async fn can_upload_asset(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.is_admin())
    }
}
