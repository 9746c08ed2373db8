use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, EntityTrait,
    QueryOrder, QuerySelect,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{
        entities::{FileMetadata, StoredFile},
        ports::StoredFileRepository,
        value_objects::CreateStoredFile,
    },
};
use crate::entity::stored_files::{
    ActiveModel as StoredFileActiveModel, Column as StoredFileColumn,
    Entity as StoredFileEntity,
};

use super::mappers::StoredFileMetadataRow;

#[derive(Debug, Clone)]
pub struct PostgresStoredFileRepository {
    pub db: DatabaseConnection,
}

impl PostgresStoredFileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StoredFileRepository for PostgresStoredFileRepository {
    async fn create(&self, input: CreateStoredFile) -> Result<StoredFile, CoreError> {
        let (uploader_id, uploader_login) = match input.uploader.as_ref() {
            Some(uploader) => (Some(uploader.id), Some(uploader.login.clone())),
            None => (None, None),
        };

        let active_model = StoredFileActiveModel {
            id: NotSet,
            size_bytes: Set(input.size_bytes()),
            file_name: Set(input.file_name),
            mime_type: Set(input.mime_type),
            payload: Set(input.payload.to_vec()),
            uploaded_at: Set(input.uploaded_at.fixed_offset()),
            uploader_id: Set(uploader_id),
            uploader_login: Set(uploader_login),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            error!("Failed to create stored file: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(StoredFile::from(model))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<StoredFile>, CoreError> {
        let model = StoredFileEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get stored file: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(StoredFile::from))
    }

    async fn list(&self) -> Result<Vec<FileMetadata>, CoreError> {
        let rows = StoredFileEntity::find()
            .select_only()
            .columns([
                StoredFileColumn::Id,
                StoredFileColumn::FileName,
                StoredFileColumn::MimeType,
                StoredFileColumn::SizeBytes,
                StoredFileColumn::UploadedAt,
                StoredFileColumn::UploaderId,
                StoredFileColumn::UploaderLogin,
            ])
            .order_by_asc(StoredFileColumn::Id)
            .into_model::<StoredFileMetadataRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list stored files: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(FileMetadata::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), CoreError> {
        StoredFileEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete stored file: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
