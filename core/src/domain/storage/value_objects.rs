use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::entities::Uploader;

/// A file about to be persisted. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStoredFile {
    pub file_name: String,
    pub mime_type: String,
    pub payload: Bytes,
    pub uploaded_at: DateTime<Utc>,
    pub uploader: Option<Uploader>,
}

impl CreateStoredFile {
    pub fn new(
        file_name: String,
        mime_type: String,
        payload: Bytes,
        uploader: Option<Uploader>,
    ) -> Self {
        Self {
            file_name,
            mime_type,
            payload,
            uploaded_at: Utc::now(),
            uploader,
        }
    }

    pub fn size_bytes(&self) -> i64 {
        self.payload.len() as i64
    }
}

/// Transport-level facts about a multipart upload.
#[derive(Debug, Clone, Default)]
pub struct StoreBinaryInput {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    /// Size announced by the client. Informational only.
    pub size_hint: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct StoreBase64Input {
    pub content: String,
    pub file_name: Option<String>,
}
