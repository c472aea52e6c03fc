//! Multipart form reading shared by the track and gallery upload endpoints.

use axum::extract::Multipart;

use crate::server::{error::AppError, model::upload::UploadedFile};

/// Reads a multipart form holding one `file` part and one optional text part.
///
/// Unknown parts are skipped. A blank text part is treated as absent.
///
/// # Arguments
/// - `multipart` - Request body
/// - `text_field` - Name of the optional text part, such as `title` or `caption`
///
/// # Returns
/// - `Ok((file, text))` - The file and the optional text value
/// - `Err(AppError::BadRequest)` - No `file` part was sent
/// - `Err(AppError::MultipartErr)` - Malformed body or the size limit was exceeded
pub async fn read_upload(
    mut multipart: Multipart,
    text_field: &str,
) -> Result<(UploadedFile, Option<String>), AppError> {
    let mut file = None;
    let mut text = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;

            file = Some(UploadedFile {
                file_name,
                content_type,
                data,
            });
        } else if name == text_field {
            let value = field.text().await?;
            if !value.trim().is_empty() {
                text = Some(value);
            }
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing 'file' part".to_string()))?;

    Ok((file, text))
}
