use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{
        entities::{FileMetadata, StoredFile},
        ports::StoredFileRepository,
        value_objects::CreateStoredFile,
    },
};

use super::{memory::InMemoryStoredFileRepository, repository::PostgresStoredFileRepository};

/// Stored file backend selected at startup.
#[derive(Debug, Clone)]
pub enum StoredFileStore {
    Postgres(PostgresStoredFileRepository),
    InMemory(InMemoryStoredFileRepository),
}

impl StoredFileRepository for StoredFileStore {
    async fn create(&self, input: CreateStoredFile) -> Result<StoredFile, CoreError> {
        match self {
            Self::Postgres(repository) => repository.create(input).await,
            Self::InMemory(repository) => repository.create(input).await,
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<StoredFile>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.get_by_id(id).await,
            Self::InMemory(repository) => repository.get_by_id(id).await,
        }
    }

    async fn list(&self) -> Result<Vec<FileMetadata>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.list().await,
            Self::InMemory(repository) => repository.list().await,
        }
    }

    async fn delete(&self, id: i64) -> Result<(), CoreError> {
        match self {
            Self::Postgres(repository) => repository.delete(id).await,
            Self::InMemory(repository) => repository.delete(id).await,
        }
    }
}
