use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::{FileMetadata, StoredFile};
use super::value_objects::CreateStoredFile;

/// Repository for stored files (metadata and bytes together)
#[cfg_attr(test, mockall::automock)]
pub trait StoredFileRepository: Send + Sync {
    /// Persist a new file and return it with its assigned identifier
    fn create(
        &self,
        input: CreateStoredFile,
    ) -> impl Future<Output = Result<StoredFile, CoreError>> + Send;

    /// Get a stored file by ID, payload included
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<StoredFile>, CoreError>> + Send;

    /// List the metadata of every stored file, ordered by ascending ID
    fn list(&self) -> impl Future<Output = Result<Vec<FileMetadata>, CoreError>> + Send;

    /// Delete a stored file. Deleting a missing ID is a no-op
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Port for the filesystem upload directory
pub trait AssetStoragePort: Send + Sync {
    /// Write an object, replacing any existing object with the same name
    fn put_object(
        &self,
        object_name: &str,
        payload: Bytes,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Public URL under which the object is served
    fn public_url(&self, object_name: &str) -> String;
}
