use std::path::PathBuf;

use bytes::Bytes;
use tracing::{error, instrument};

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::AssetStoragePort};

/// Upload directory on the local filesystem, served under `url_prefix`.
#[derive(Debug, Clone)]
pub struct LocalAssetStorage {
    root: PathBuf,
    url_prefix: String,
}

impl LocalAssetStorage {
    pub fn new(root: PathBuf, url_prefix: String) -> Self {
        Self { root, url_prefix }
    }
}

impl AssetStoragePort for LocalAssetStorage {
    #[instrument(skip(self, payload), fields(size = payload.len()))]
    async fn put_object(&self, object_name: &str, payload: Bytes) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            error!(error = %e, root = %self.root.display(), "Failed to create upload directory");
            CoreError::Storage
        })?;

        let target = self.root.join(object_name);

        tokio::fs::write(&target, &payload).await.map_err(|e| {
            error!(error = %e, target = %target.display(), "Failed to write uploaded file");
            CoreError::Storage
        })?;

        Ok(())
    }

    fn public_url(&self, object_name: &str) -> String {
        format!("{}/{}", self.url_prefix.trim_end_matches('/'), object_name)
    }
}
