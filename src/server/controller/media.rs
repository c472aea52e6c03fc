use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::media::MediaService,
        state::AppState,
        storage::MediaStream,
    },
};

/// Tag for grouping media endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

/// Stream a stored audio, image or video file.
///
/// The `Range` request header is forwarded to storage so players can seek.
///
/// # Returns
/// - `200 OK` - Whole file
/// - `206 Partial Content` - Requested byte range
/// - `400 Bad Request` - Malformed key
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No file under that key
/// - `416 Range Not Satisfiable` - Range outside the file
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/media/{key}",
    tag = MEDIA_TAG,
    params(
        ("key" = String, Path, description = "Object key, e.g. `Album/01 Intro.mp3`")
    ),
    responses(
        (status = 200, description = "File contents"),
        (status = 206, description = "Partial file contents"),
        (status = 400, description = "Invalid key", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 416, description = "Range not satisfiable"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let range = headers
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok());

    let stream = MediaService::new(state.storage.as_ref())
        .open(&key, range)
        .await?;

    into_response(stream)
}

fn into_response(stream: MediaStream) -> Result<Response, AppError> {
    let status = StatusCode::from_u16(stream.status)
        .map_err(|e| AppError::InternalError(format!("Invalid storage status: {}", e)))?;

    let mut builder = Response::builder()
        .status(status)
        .header(header::ACCEPT_RANGES, "bytes");

    if let Some(content_type) = stream.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(content_length) = stream.content_length {
        builder = builder.header(header::CONTENT_LENGTH, content_length);
    }
    if let Some(content_range) = stream.content_range {
        builder = builder.header(header::CONTENT_RANGE, content_range);
    }

    builder
        .body(stream.body)
        .map_err(|e| AppError::InternalError(format!("Failed to build media response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn copies_stream_headers() {
        let response = into_response(MediaStream {
            status: 206,
            content_type: Some("audio/mpeg".to_string()),
            content_length: Some(4),
            content_range: Some("bytes 2-5/10".to_string()),
            body: Body::from("2345"),
        })
        .unwrap();

        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "4");
        assert_eq!(response.headers()[header::CONTENT_RANGE], "bytes 2-5/10");
        assert_eq!(response.headers()[header::ACCEPT_RANGES], "bytes");
    }

    #[test]
    fn omits_missing_headers() {
        let response = into_response(MediaStream {
            status: 200,
            content_type: None,
            content_length: None,
            content_range: None,
            body: Body::empty(),
        })
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_RANGE).is_none());
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }
}
