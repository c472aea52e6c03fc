use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        album::{AlbumDto, CreateAlbumDto, PaginatedAlbumsDto, UpdateAlbumDto},
        api::{ErrorDto, MessageDto},
        reorder::ReorderItemDto,
        track::TrackDto,
    },
    server::{
        controller::{param::PaginationParam, upload::read_upload},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            album::{CreateAlbumParam, UpdateAlbumParam},
            reorder::ReorderItem,
        },
        service::album::AlbumService,
        state::AppState,
    },
};

/// Tag for grouping album endpoints in OpenAPI documentation
pub static ALBUM_TAG: &str = "album";

/// Get paginated albums ordered by title.
///
/// # Access Control
/// - Any logged-in member
///
/// # Returns
/// - `200 OK` - Page of albums with track counts
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/albums",
    tag = ALBUM_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved albums", body = PaginatedAlbumsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_albums(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let albums = AlbumService::new(&state.db, state.storage.as_ref())
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(albums.into_dto())))
}

/// Create an empty album.
///
/// The album name doubles as its storage folder.
///
/// # Access Control
/// - `Admin` - Only admins can create albums
///
/// # Returns
/// - `201 Created` - The created album
/// - `400 Bad Request` - Name empty, containing `/`, reserved or already used
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/albums",
    tag = ALBUM_TAG,
    request_body = CreateAlbumDto,
    responses(
        (status = 201, description = "Successfully created album", body = AlbumDto),
        (status = 400, description = "Invalid album data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_album(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let album = AlbumService::new(&state.db, state.storage.as_ref())
        .create(CreateAlbumParam {
            name: payload.name,
            title: payload.title,
            artist: payload.artist,
            year: payload.year,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(album.into_dto(Vec::new()))))
}

/// Get an album with its tracks ordered by position.
///
/// # Access Control
/// - Any logged-in member
///
/// # Returns
/// - `200 OK` - Album and tracks
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Album does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/albums/{album_id}",
    tag = ALBUM_TAG,
    params(
        ("album_id" = String, Path, description = "Album ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved album", body = AlbumDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_album(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let album = AlbumService::new(&state.db, state.storage.as_ref())
        .get_by_id(&album_id)
        .await?;

    Ok((StatusCode::OK, Json(album.into_dto())))
}

/// Update album details.
///
/// The name is fixed once created since it names the storage folder.
///
/// # Access Control
/// - `Admin` - Only admins can edit albums
///
/// # Returns
/// - `200 OK` - The updated album with its tracks
/// - `400 Bad Request` - Empty title
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Album does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/albums/{album_id}",
    tag = ALBUM_TAG,
    params(
        ("album_id" = String, Path, description = "Album ID")
    ),
    request_body = UpdateAlbumDto,
    responses(
        (status = 200, description = "Successfully updated album", body = AlbumDto),
        (status = 400, description = "Invalid album data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_album(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<String>,
    Json(payload): Json<UpdateAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AlbumService::new(&state.db, state.storage.as_ref());
    service
        .update(UpdateAlbumParam {
            id: album_id.clone(),
            title: payload.title,
            artist: payload.artist,
            year: payload.year,
            description: payload.description,
        })
        .await?;
    let album = service.get_by_id(&album_id).await?;

    Ok((StatusCode::OK, Json(album.into_dto())))
}

/// Delete an album with its tracks and their files.
///
/// Playlist entries pointing at the album's tracks are removed as well.
///
/// # Access Control
/// - `Admin` - Only admins can delete albums
///
/// # Returns
/// - `204 No Content` - Album deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Album does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/albums/{album_id}",
    tag = ALBUM_TAG,
    params(
        ("album_id" = String, Path, description = "Album ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted album"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_album(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AlbumService::new(&state.db, state.storage.as_ref())
        .delete(&album_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder the tracks of an album.
///
/// The body is a JSON array of `{id, position}` naming the final position of each
/// moved track. The update is all-or-nothing.
///
/// # Access Control
/// - `Admin` - Only admins can reorder albums
///
/// # Returns
/// - `200 OK` - Positions updated
/// - `400 Bad Request` - Body is not an array, or positions collide, repeat, are
///   negative or name a track of another album
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Album does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/albums/{album_id}/reorder",
    tag = ALBUM_TAG,
    params(
        ("album_id" = String, Path, description = "Album ID")
    ),
    request_body = Vec<ReorderItemDto>,
    responses(
        (status = 200, description = "Tracks reordered", body = MessageDto),
        (status = 400, description = "Invalid reorder request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_tracks(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<String>,
    payload: Result<Json<Vec<ReorderItemDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Json(items) = payload?;

    AlbumService::new(&state.db, state.storage.as_ref())
        .reorder(
            &album_id,
            items.into_iter().map(ReorderItem::from_dto).collect(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Tracks reordered".to_string(),
        }),
    ))
}

/// Upload an audio file into an album.
///
/// Multipart form with a `file` part and an optional `title` part. The file is
/// stored as `{album name}/{file name}` and appended as the album's last track.
///
/// # Access Control
/// - `Admin` - Only admins can upload tracks
///
/// # Returns
/// - `201 Created` - The created track
/// - `400 Bad Request` - Missing file, unsupported extension or duplicate file name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Album does not exist
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/albums/{album_id}/tracks",
    tag = ALBUM_TAG,
    params(
        ("album_id" = String, Path, description = "Album ID")
    ),
    request_body(content_type = "multipart/form-data", description = "`file` and optional `title`"),
    responses(
        (status = 201, description = "Track uploaded", body = TrackDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_track(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (file, title) = read_upload(multipart, "title").await?;

    let track = AlbumService::new(&state.db, state.storage.as_ref())
        .upload_track(&album_id, file, title)
        .await?;

    Ok((StatusCode::CREATED, Json(track.into_dto())))
}
