use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        gallery::{GalleryItemDto, PaginatedGalleryDto, UpdateGalleryItemDto},
    },
    server::{
        controller::{param::PaginationParam, upload::read_upload},
        error::AppError,
        middleware::auth::AuthGuard,
        service::gallery::GalleryService,
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// Get paginated gallery items, newest first.
///
/// # Returns
/// - `200 OK` - Page of photos and videos
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved gallery", body = PaginatedGalleryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = GalleryService::new(&state.db, state.storage.as_ref())
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(items.into_dto())))
}

/// Upload a photo or video.
///
/// Multipart form with a `file` part and an optional `caption` part. Files are
/// limited to 200 MiB and must be an image or a video.
///
/// # Returns
/// - `201 Created` - The created gallery item
/// - `400 Bad Request` - Missing, empty, oversized or unsupported file
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    request_body(content_type = "multipart/form-data", description = "`file` and optional `caption`"),
    responses(
        (status = 201, description = "Item uploaded", body = GalleryItemDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_gallery_item(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (file, caption) = read_upload(multipart, "caption").await?;

    let item = GalleryService::new(&state.db, state.storage.as_ref())
        .upload(&user, file, caption)
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Change or clear the caption of a gallery item.
///
/// # Access Control
/// - The uploader or an admin
///
/// # Returns
/// - `200 OK` - The updated item
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither uploader nor admin
/// - `404 Not Found` - Item does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/gallery/{item_id}",
    tag = GALLERY_TAG,
    params(
        ("item_id" = String, Path, description = "Gallery item ID")
    ),
    request_body = UpdateGalleryItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = GalleryItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither uploader nor admin", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gallery_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<String>,
    Json(payload): Json<UpdateGalleryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let item = GalleryService::new(&state.db, state.storage.as_ref())
        .update_caption(&user, &item_id, payload.caption)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete a gallery item and its file.
///
/// # Access Control
/// - The uploader or an admin
///
/// # Returns
/// - `204 No Content` - Item deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither uploader nor admin
/// - `404 Not Found` - Item does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/gallery/{item_id}",
    tag = GALLERY_TAG,
    params(
        ("item_id" = String, Path, description = "Gallery item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted item"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither uploader nor admin", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    GalleryService::new(&state.db, state.storage.as_ref())
        .delete(&user, &item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
