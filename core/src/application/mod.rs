use tracing::info;

use crate::{
    domain::common::{QuillConfig, StorageBackend, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::DatabaseHealthCheck,
        jwt::HmacTokenDecoder,
        storage::{
            memory::InMemoryStoredFileRepository, repository::PostgresStoredFileRepository,
            store::StoredFileStore,
        },
        uploads::LocalAssetStorage,
    },
};

pub type QuillService =
    Service<StoredFileStore, LocalAssetStorage, HmacTokenDecoder, DatabaseHealthCheck>;

pub async fn create_service(config: QuillConfig) -> Result<QuillService, anyhow::Error> {
    let (stored_files, db) = match config.database.backend {
        StorageBackend::Postgres => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: config.database.url(),
            })
            .await?;
            let db = postgres.get_db();

            (
                StoredFileStore::Postgres(PostgresStoredFileRepository::new(db.clone())),
                Some(db),
            )
        }
        StorageBackend::InMemory => {
            info!("Using in-memory file store, files are lost on restart");
            (
                StoredFileStore::InMemory(InMemoryStoredFileRepository::new()),
                None,
            )
        }
    };

    let asset_storage = LocalAssetStorage::new(config.uploads.dir, config.uploads.url_prefix);
    let token_decoder = HmacTokenDecoder::new(config.auth.jwt_secret.as_deref());

    Ok(Service::new(
        stored_files,
        asset_storage,
        token_decoder,
        DatabaseHealthCheck::new(db),
    ))
}
