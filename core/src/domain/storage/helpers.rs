use std::fmt::Display;
use std::pin::pin;
use std::sync::LazyLock;

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use regex::Regex;
use tracing::error;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

static DATA_URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)data:([A-Za-z0-9_/]+);base64,(.+)").expect("data URI pattern is valid")
});

/// Standard alphabet, padding accepted but not required.
const BASE64_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBase64Content<'a> {
    pub mime_type: Option<&'a str>,
    pub body: &'a str,
}

/// Split a Base64 upload into its MIME type (if any) and Base64 body.
///
/// A `data:<type>;base64,<body>` match yields both parts. Without such a
/// match, a string containing a comma keeps everything after the first comma
/// and never yields a type. Anything else is taken as a bare body.
pub fn parse_base64_content(content: &str) -> ParsedBase64Content<'_> {
    if let Some(captures) = DATA_URI_PATTERN.captures(content)
        && let (Some(mime_type), Some(body)) = (captures.get(1), captures.get(2))
    {
        return ParsedBase64Content {
            mime_type: Some(mime_type.as_str()),
            body: body.as_str(),
        };
    }

    if let Some((_, body)) = content.split_once(',') {
        return ParsedBase64Content {
            mime_type: None,
            body,
        };
    }

    ParsedBase64Content {
        mime_type: None,
        body: content,
    }
}

pub fn decode_base64_body(body: &str) -> Result<Bytes, CoreError> {
    BASE64_DECODER
        .decode(body)
        .map(Bytes::from)
        .map_err(|e| {
            error!(error = %e, "Failed to decode base64 content");
            CoreError::Storage
        })
}

pub fn extension_for_mime_type(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/svg+xml" => "svg",
        "image/webp" => "webp",
        _ => "bin",
    }
}

/// Name for a file the client did not name, e.g. `image.png`.
pub fn default_file_name(stem: &str, mime_type: &str) -> String {
    format!("{}.{}", stem, extension_for_mime_type(mime_type))
}

/// Fresh name for the upload directory, keeping the original extension.
pub fn generate_asset_name(original_name: Option<&str>) -> String {
    let extension = original_name
        .and_then(|name| name.rfind('.').map(|idx| &name[idx..]))
        .unwrap_or("");

    format!("{}{}", generate_uuid_v7(), extension)
}

/// Read a whole upload stream into memory.
pub async fn drain_stream<S, E>(stream: S) -> Result<Bytes, CoreError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Display,
{
    let mut stream = pin!(stream);
    let mut buffer = BytesMut::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            error!(error = %e, read = buffer.len(), "Failed to read upload stream");
            CoreError::Storage
        })?;
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer.freeze())
}
