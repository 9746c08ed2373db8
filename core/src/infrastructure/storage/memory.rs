use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{
        entities::{FileMetadata, StoredFile},
        ports::StoredFileRepository,
        value_objects::CreateStoredFile,
    },
};

#[derive(Debug, Default)]
struct InMemoryState {
    last_id: AtomicI64,
    files: RwLock<BTreeMap<i64, StoredFile>>,
}

/// Process-local store, used for development and tests.
///
/// Identifiers come from a per-store counter, so clones share one sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoredFileRepository {
    state: Arc<InMemoryState>,
}

impl InMemoryStoredFileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoredFileRepository for InMemoryStoredFileRepository {
    async fn create(&self, input: CreateStoredFile) -> Result<StoredFile, CoreError> {
        let id = self.state.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored_file = StoredFile::new(id, input);

        self.state
            .files
            .write()
            .await
            .insert(id, stored_file.clone());

        Ok(stored_file)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<StoredFile>, CoreError> {
        Ok(self.state.files.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<FileMetadata>, CoreError> {
        Ok(self
            .state
            .files
            .read()
            .await
            .values()
            .map(FileMetadata::from)
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.state.files.write().await.remove(&id);
        Ok(())
    }
}
