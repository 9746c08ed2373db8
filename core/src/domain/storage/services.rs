use std::fmt::Display;
use std::future::Future;

use bytes::Bytes;
use futures::Stream;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    authentication::{ports::TokenDecoder, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    storage::{
        entities::{FileMetadata, StoredFile, UploadedAsset, Uploader},
        helpers::{
            DEFAULT_MIME_TYPE, decode_base64_body, default_file_name, drain_stream,
            generate_asset_name, parse_base64_content,
        },
        policies::FilePolicy,
        ports::{AssetStoragePort, StoredFileRepository},
        value_objects::{CreateStoredFile, StoreBase64Input, StoreBinaryInput},
    },
};

/// Service trait for file storage operations
pub trait FileService: Send + Sync {
    /// Store a file read from a binary (multipart) stream
    fn store_binary<S, E>(
        &self,
        identity: Option<Identity>,
        input: StoreBinaryInput,
        stream: S,
    ) -> impl Future<Output = Result<StoredFile, CoreError>> + Send
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: Display + Send;

    /// Store a file sent as a Base64 string, optionally a data URI
    fn store_base64(
        &self,
        identity: Option<Identity>,
        input: StoreBase64Input,
    ) -> impl Future<Output = Result<StoredFile, CoreError>> + Send;

    /// Get a file with its bytes
    fn get_file(&self, id: i64) -> impl Future<Output = Result<StoredFile, CoreError>> + Send;

    /// List the metadata of all files
    fn list_files(&self) -> impl Future<Output = Result<Vec<FileMetadata>, CoreError>> + Send;

    /// Delete a file
    fn delete_file(&self, id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Write a file into the public upload directory
    fn upload_asset<S, E>(
        &self,
        identity: Option<Identity>,
        original_name: Option<String>,
        stream: S,
    ) -> impl Future<Output = Result<UploadedAsset, CoreError>> + Send
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: Display + Send;
}

impl<SF, AS, TD, HC> Service<SF, AS, TD, HC>
where
    SF: StoredFileRepository,
    AS: AssetStoragePort,
    TD: TokenDecoder,
    HC: HealthCheckRepository,
{
    async fn persist(&self, input: CreateStoredFile) -> Result<StoredFile, CoreError> {
        let file_name = input.file_name.clone();

        let stored_file = self
            .stored_file_repository
            .create(input)
            .await
            .map_err(|e| {
                error!(error = %e, file_name = %file_name, "Failed to store file");
                CoreError::Storage
            })?;

        info!(
            file_id = stored_file.id,
            file_name = %stored_file.file_name,
            mime_type = %stored_file.mime_type,
            size = stored_file.size_bytes,
            "File stored"
        );

        Ok(stored_file)
    }
}

impl<SF, AS, TD, HC> FileService for Service<SF, AS, TD, HC>
where
    SF: StoredFileRepository,
    AS: AssetStoragePort,
    TD: TokenDecoder,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, identity, stream), fields(file_name = ?input.file_name))]
    async fn store_binary<S, E>(
        &self,
        identity: Option<Identity>,
        input: StoreBinaryInput,
        stream: S,
    ) -> Result<StoredFile, CoreError>
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: Display + Send,
    {
        let payload = drain_stream(stream).await?;

        if payload.is_empty() {
            warn!("Empty file upload attempted");
            return Err(CoreError::Validation("file cannot be empty".to_string()));
        }

        if let Some(size_hint) = input.size_hint
            && size_hint != payload.len() as u64
        {
            warn!(
                size_hint,
                size = payload.len(),
                "Declared size does not match received bytes"
            );
        }

        let mime_type = input
            .content_type
            .filter(|content_type| !content_type.is_empty())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

        let file_name = input
            .file_name
            .filter(|file_name| !file_name.is_empty())
            .unwrap_or_else(|| default_file_name("file", &mime_type));

        self.persist(CreateStoredFile::new(
            file_name,
            mime_type,
            payload,
            identity.map(Uploader::from),
        ))
        .await
    }

    #[instrument(skip(self, identity, input), fields(file_name = ?input.file_name))]
    async fn store_base64(
        &self,
        identity: Option<Identity>,
        input: StoreBase64Input,
    ) -> Result<StoredFile, CoreError> {
        if input.content.is_empty() {
            return Err(CoreError::Validation(
                "file content cannot be empty".to_string(),
            ));
        }

        let parsed = parse_base64_content(&input.content);
        let mime_type = parsed.mime_type.unwrap_or(DEFAULT_MIME_TYPE).to_string();
        let payload = decode_base64_body(parsed.body)?;

        if payload.is_empty() {
            warn!("Base64 content decoded to an empty payload");
            return Err(CoreError::Storage);
        }

        let file_name = input
            .file_name
            .filter(|file_name| !file_name.is_empty())
            .unwrap_or_else(|| default_file_name("image", &mime_type));

        self.persist(CreateStoredFile::new(
            file_name,
            mime_type,
            payload,
            identity.map(Uploader::from),
        ))
        .await
    }

    #[instrument(skip(self))]
    async fn get_file(&self, id: i64) -> Result<StoredFile, CoreError> {
        self.stored_file_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn list_files(&self) -> Result<Vec<FileMetadata>, CoreError> {
        let files = self.stored_file_repository.list().await?;

        tracing::debug!(count = files.len(), "Listed files");

        Ok(files)
    }

    #[instrument(skip(self))]
    async fn delete_file(&self, id: i64) -> Result<(), CoreError> {
        self.stored_file_repository.delete(id).await?;

        info!(file_id = id, "File deleted");

        Ok(())
    }

    #[instrument(skip(self, identity, stream))]
    async fn upload_asset<S, E>(
        &self,
        identity: Option<Identity>,
        original_name: Option<String>,
        stream: S,
    ) -> Result<UploadedAsset, CoreError>
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: Display + Send,
    {
        let identity = identity.ok_or(CoreError::Unauthorized)?;

        ensure_policy(
            self.can_upload_asset(&identity).await,
            "insufficient permissions to upload files",
        )?;

        let payload = drain_stream(stream).await?;

        if payload.is_empty() {
            return Err(CoreError::Validation("file cannot be empty".to_string()));
        }

        let file_name = generate_asset_name(original_name.as_deref());
        let size = payload.len();

        self.asset_storage.put_object(&file_name, payload).await?;

        let url = self.asset_storage.public_url(&file_name);

        info!(file_name = %file_name, size, url = %url, "Asset uploaded");

        Ok(UploadedAsset { file_name, url })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::stream;
    use tempfile::TempDir;

    use super::*;
    use crate::domain::storage::ports::MockStoredFileRepository;
    use crate::domain::health::ports::MockHealthCheckRepository;
    use crate::infrastructure::{
        jwt::HmacTokenDecoder, storage::memory::InMemoryStoredFileRepository,
        uploads::LocalAssetStorage,
    };

    type TestService = Service<
        InMemoryStoredFileRepository,
        LocalAssetStorage,
        HmacTokenDecoder,
        MockHealthCheckRepository,
    >;

    fn service_with(repository: InMemoryStoredFileRepository, uploads: &TempDir) -> TestService {
        Service::new(
            repository,
            LocalAssetStorage::new(uploads.path().to_path_buf(), "/content/uploads".to_string()),
            HmacTokenDecoder::new(None),
            MockHealthCheckRepository::new(),
        )
    }

    fn service() -> (TestService, TempDir) {
        let uploads = TempDir::new().unwrap();
        (service_with(InMemoryStoredFileRepository::default(), &uploads), uploads)
    }

    fn body(
        chunks: &[&'static [u8]],
    ) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + use<> {
        stream::iter(
            chunks
                .iter()
                .copied()
                .map(|chunk| Ok::<_, std::io::Error>(Bytes::from_static(chunk)))
                .collect::<Vec<_>>(),
        )
    }

    fn identity(authorities: &[&str]) -> Identity {
        Identity {
            user_id: 42,
            login: "editor".to_string(),
            authorities: authorities.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn binary_input(file_name: &str, content_type: &str) -> StoreBinaryInput {
        StoreBinaryInput {
            file_name: Some(file_name.to_string()),
            content_type: Some(content_type.to_string()),
            size_hint: None,
        }
    }

    #[tokio::test]
    async fn test_store_binary_then_get_returns_same_payload() {
        let (service, _uploads) = service();

        let stored = service
            .store_binary(
                None,
                binary_input("report.pdf", "application/pdf"),
                body(&[b"%PDF-", b"1.7"]),
            )
            .await
            .unwrap();

        let fetched = service.get_file(stored.id).await.unwrap();

        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.payload, Bytes::from_static(b"%PDF-1.7"));
        assert_eq!(fetched.size_bytes, 8);
        assert_eq!(fetched.file_name, "report.pdf");
        assert_eq!(fetched.mime_type, "application/pdf");
        assert!(fetched.uploader.is_none());
    }

    #[tokio::test]
    async fn test_store_binary_ignores_size_hint() {
        let (service, _uploads) = service();

        let stored = service
            .store_binary(
                None,
                StoreBinaryInput {
                    size_hint: Some(1024),
                    ..binary_input("a.txt", "text/plain")
                },
                body(&[b"abc"]),
            )
            .await
            .unwrap();

        assert_eq!(stored.size_bytes, 3);
    }

    #[tokio::test]
    async fn test_store_binary_attaches_uploader() {
        let (service, _uploads) = service();

        let stored = service
            .store_binary(
                Some(identity(&["ROLE_USER"])),
                binary_input("a.txt", "text/plain"),
                body(&[b"abc"]),
            )
            .await
            .unwrap();

        assert_eq!(
            stored.uploader,
            Some(Uploader {
                id: 42,
                login: "editor".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_store_binary_defaults_name_and_type() {
        let (service, _uploads) = service();

        let stored = service
            .store_binary(None, StoreBinaryInput::default(), body(&[b"abc"]))
            .await
            .unwrap();

        assert_eq!(stored.mime_type, "application/octet-stream");
        assert_eq!(stored.file_name, "file.bin");
    }

    #[tokio::test]
    async fn test_store_binary_rejects_empty_stream() {
        let (service, _uploads) = service();

        let result = service
            .store_binary(None, binary_input("empty.txt", "text/plain"), body(&[]))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation("file cannot be empty".to_string()))
        );
        assert!(service.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_binary_stream_failure_is_storage_error() {
        let (service, _uploads) = service();

        let failing = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::other("connection reset")),
        ]);

        let result = service
            .store_binary(None, binary_input("a.txt", "text/plain"), failing)
            .await;

        assert_eq!(result, Err(CoreError::Storage));
        assert!(service.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_binary_repository_failure_is_storage_error() {
        let uploads = TempDir::new().unwrap();
        let mut repository = MockStoredFileRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let service = Service::new(
            repository,
            LocalAssetStorage::new(uploads.path().to_path_buf(), "/content/uploads".to_string()),
            HmacTokenDecoder::new(None),
            MockHealthCheckRepository::new(),
        );

        let result = service
            .store_binary(None, binary_input("a.txt", "text/plain"), body(&[b"abc"]))
            .await;

        assert_eq!(result, Err(CoreError::Storage));
    }

    #[tokio::test]
    async fn test_store_base64_round_trip() {
        let (service, _uploads) = service();

        let stored = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: "aGVsbG8gd29ybGQ=".to_string(),
                    file_name: None,
                },
            )
            .await
            .unwrap();

        let fetched = service.get_file(stored.id).await.unwrap();
        assert_eq!(fetched.payload, Bytes::from_static(b"hello world"));
        assert_eq!(fetched.size_bytes, 11);
        assert_eq!(fetched.mime_type, "application/octet-stream");
        assert_eq!(fetched.file_name, "image.bin");
    }

    #[tokio::test]
    async fn test_store_base64_data_uri_resolves_mime_type() {
        let (service, _uploads) = service();

        let stored = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: "data:image/png;base64,iVBORw0KGgo=".to_string(),
                    file_name: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(stored.mime_type, "image/png");
        assert_eq!(stored.file_name, "image.png");
        assert_eq!(
            stored.payload,
            Bytes::from_static(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a])
        );
    }

    #[tokio::test]
    async fn test_store_base64_gif_gets_synthesized_name() {
        let (service, _uploads) = service();

        let stored = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: "data:image/gif;base64,R0lGODlh".to_string(),
                    file_name: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(stored.file_name, "image.gif");
        assert_eq!(stored.payload, Bytes::from_static(b"GIF89a"));
    }

    #[tokio::test]
    async fn test_store_base64_comma_prefix_without_data_uri() {
        let (service, _uploads) = service();

        let stored = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: "prefix,aGVsbG8=".to_string(),
                    file_name: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(stored.payload, Bytes::from_static(b"hello"));
        assert_eq!(stored.mime_type, "application/octet-stream");
        assert_eq!(stored.file_name, "image.bin");
    }

    #[tokio::test]
    async fn test_store_base64_file_name_hint_wins() {
        let (service, _uploads) = service();

        let stored = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: "data:image/png;base64,iVBORw0KGgo=".to_string(),
                    file_name: Some("logo.png".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(stored.file_name, "logo.png");
    }

    #[tokio::test]
    async fn test_store_base64_rejects_empty_content() {
        let (service, _uploads) = service();

        let result = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: String::new(),
                    file_name: None,
                },
            )
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation(
                "file content cannot be empty".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_store_base64_malformed_body_is_storage_error() {
        let (service, _uploads) = service();

        let result = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: "data:image/png;base64,@@not-base64@@".to_string(),
                    file_name: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::Storage));
        assert!(service.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_base64_line_wrapped_body_is_rejected() {
        let (service, _uploads) = service();

        let result = service
            .store_base64(
                None,
                StoreBase64Input {
                    content: "data:text/plain;base64,aGVs\nbG8gd29ybGQ=".to_string(),
                    file_name: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::Storage));
        assert!(service.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_base64_empty_body_is_rejected() {
        let (service, _uploads) = service();

        for content in ["prefix,", "data:image/png;base64,"] {
            let result = service
                .store_base64(
                    None,
                    StoreBase64Input {
                        content: content.to_string(),
                        file_name: None,
                    },
                )
                .await;

            assert_eq!(result, Err(CoreError::Storage), "{content}");
        }

        assert!(service.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_file_is_not_found() {
        let (service, _uploads) = service();

        assert_eq!(service.get_file(404).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_file() {
        let (service, _uploads) = service();

        let first = service
            .store_binary(None, binary_input("a.txt", "text/plain"), body(&[b"a"]))
            .await
            .unwrap();
        let second = service
            .store_binary(None, binary_input("b.txt", "text/plain"), body(&[b"b"]))
            .await
            .unwrap();

        service.delete_file(9999).await.unwrap();
        assert_eq!(service.list_files().await.unwrap().len(), 2);

        service.delete_file(first.id).await.unwrap();
        let remaining = service.list_files().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
        assert_eq!(service.get_file(first.id).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_list_files_in_insertion_order() {
        let (service, _uploads) = service();

        for name in ["one.txt", "two.txt", "three.txt"] {
            service
                .store_binary(None, binary_input(name, "text/plain"), body(&[b"x"]))
                .await
                .unwrap();
        }

        let names: Vec<String> = service
            .list_files()
            .await
            .unwrap()
            .into_iter()
            .map(|file| file.file_name)
            .collect();

        assert_eq!(names, vec!["one.txt", "two.txt", "three.txt"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_uploads_get_distinct_ids() {
        let (service, _uploads) = service();
        let service = Arc::new(service);

        let handles = (0..32)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .store_binary(
                            None,
                            binary_input(&format!("{i}.txt"), "text/plain"),
                            body(&[b"payload"]),
                        )
                        .await
                        .map(|file| file.id)
                })
            })
            .collect::<Vec<_>>();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(service.list_files().await.unwrap().len(), 32);
    }

    #[tokio::test]
    async fn test_upload_asset_writes_file() {
        let (service, uploads) = service();

        let asset = service
            .upload_asset(
                Some(identity(&["ROLE_ADMIN"])),
                Some("banner.jpg".to_string()),
                body(&[b"jpeg-bytes"]),
            )
            .await
            .unwrap();

        assert!(asset.file_name.ends_with(".jpg"));
        assert_eq!(asset.url, format!("/content/uploads/{}", asset.file_name));
        let written = std::fs::read(uploads.path().join(&asset.file_name)).unwrap();
        assert_eq!(written, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_upload_asset_requires_admin() {
        let (service, uploads) = service();

        let anonymous = service
            .upload_asset(None, Some("a.jpg".to_string()), body(&[b"x"]))
            .await;
        assert_eq!(anonymous, Err(CoreError::Unauthorized));

        let user = service
            .upload_asset(
                Some(identity(&["ROLE_USER"])),
                Some("a.jpg".to_string()),
                body(&[b"x"]),
            )
            .await;
        assert!(matches!(user, Err(CoreError::Forbidden(_))));

        assert_eq!(std::fs::read_dir(uploads.path()).unwrap().count(), 0);
    }
}
