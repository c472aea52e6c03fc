//! Files received through multipart uploads.

use axum::body::Bytes;

/// One uploaded file part, read completely into memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as sent by the client, possibly including a path.
    pub file_name: String,
    /// Content type declared on the multipart part.
    pub content_type: Option<String>,
    pub data: Bytes,
}
