use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        playlist::{
            AddPlaylistTrackDto, CreatePlaylistDto, PlaylistDto, PlaylistSummaryDto,
            UpdatePlaylistDto,
        },
        reorder::ReorderItemDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            playlist::{CreatePlaylistParam, PlaylistSummary, UpdatePlaylistParam},
            reorder::ReorderItem,
        },
        service::playlist::PlaylistService,
        state::AppState,
    },
};

/// Tag for grouping playlist endpoints in OpenAPI documentation
pub static PLAYLIST_TAG: &str = "playlist";

/// Get every playlist with its entry count.
///
/// # Returns
/// - `200 OK` - Playlists ordered by name
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/playlists",
    tag = PLAYLIST_TAG,
    responses(
        (status = 200, description = "Successfully retrieved playlists", body = Vec<PlaylistSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_playlists(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let playlists: Vec<PlaylistSummaryDto> = PlaylistService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(PlaylistSummary::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(playlists)))
}

/// Create an empty playlist owned by the current user.
///
/// # Returns
/// - `201 Created` - The created playlist
/// - `400 Bad Request` - Empty name
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/playlists",
    tag = PLAYLIST_TAG,
    request_body = CreatePlaylistDto,
    responses(
        (status = 201, description = "Successfully created playlist", body = PlaylistDto),
        (status = 400, description = "Invalid playlist data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_playlist(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePlaylistDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let playlist = PlaylistService::new(&state.db)
        .create(CreatePlaylistParam {
            owner_id: user.id,
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(playlist.into_dto(Vec::new()))))
}

/// Get a playlist with its entries ordered by position.
///
/// # Returns
/// - `200 OK` - Playlist with track and album titles for each entry
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Playlist does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/playlists/{playlist_id}",
    tag = PLAYLIST_TAG,
    params(
        ("playlist_id" = String, Path, description = "Playlist ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved playlist", body = PlaylistDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_playlist(
    State(state): State<AppState>,
    session: Session,
    Path(playlist_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let playlist = PlaylistService::new(&state.db)
        .get_by_id(&playlist_id)
        .await?;

    Ok((StatusCode::OK, Json(playlist.into_dto())))
}

/// Rename a playlist or change its description.
///
/// # Access Control
/// - The playlist's owner or an admin
///
/// # Returns
/// - `200 OK` - The updated playlist with its entries
/// - `400 Bad Request` - Empty name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither owner nor admin
/// - `404 Not Found` - Playlist does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/playlists/{playlist_id}",
    tag = PLAYLIST_TAG,
    params(
        ("playlist_id" = String, Path, description = "Playlist ID")
    ),
    request_body = UpdatePlaylistDto,
    responses(
        (status = 200, description = "Successfully updated playlist", body = PlaylistDto),
        (status = 400, description = "Invalid playlist data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_playlist(
    State(state): State<AppState>,
    session: Session,
    Path(playlist_id): Path<String>,
    Json(payload): Json<UpdatePlaylistDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PlaylistService::new(&state.db);
    service
        .update(
            &user,
            UpdatePlaylistParam {
                id: playlist_id.clone(),
                name: payload.name,
                description: payload.description,
            },
        )
        .await?;
    let playlist = service.get_by_id(&playlist_id).await?;

    Ok((StatusCode::OK, Json(playlist.into_dto())))
}

/// Delete a playlist and its entries.
///
/// # Access Control
/// - The playlist's owner or an admin
///
/// # Returns
/// - `204 No Content` - Playlist deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither owner nor admin
/// - `404 Not Found` - Playlist does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/playlists/{playlist_id}",
    tag = PLAYLIST_TAG,
    params(
        ("playlist_id" = String, Path, description = "Playlist ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted playlist"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_playlist(
    State(state): State<AppState>,
    session: Session,
    Path(playlist_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PlaylistService::new(&state.db)
        .delete(&user, &playlist_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Append a track to a playlist.
///
/// # Access Control
/// - The playlist's owner or an admin
///
/// # Returns
/// - `200 OK` - The playlist including the new entry
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither owner nor admin
/// - `404 Not Found` - Playlist or track does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/playlists/{playlist_id}/tracks",
    tag = PLAYLIST_TAG,
    params(
        ("playlist_id" = String, Path, description = "Playlist ID")
    ),
    request_body = AddPlaylistTrackDto,
    responses(
        (status = 200, description = "Track added", body = PlaylistDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Playlist or track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_playlist_track(
    State(state): State<AppState>,
    session: Session,
    Path(playlist_id): Path<String>,
    Json(payload): Json<AddPlaylistTrackDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let playlist = PlaylistService::new(&state.db)
        .add_track(&user, &playlist_id, &payload.track_id)
        .await?;

    Ok((StatusCode::OK, Json(playlist.into_dto())))
}

/// Remove one entry from a playlist.
///
/// # Access Control
/// - The playlist's owner or an admin
///
/// # Returns
/// - `204 No Content` - Entry removed
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither owner nor admin
/// - `404 Not Found` - Playlist missing or entry not part of it
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/playlists/{playlist_id}/tracks/{entry_id}",
    tag = PLAYLIST_TAG,
    params(
        ("playlist_id" = String, Path, description = "Playlist ID"),
        ("entry_id" = String, Path, description = "Playlist entry ID")
    ),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Playlist or entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_playlist_track(
    State(state): State<AppState>,
    session: Session,
    Path((playlist_id, entry_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PlaylistService::new(&state.db)
        .remove_entry(&user, &playlist_id, &entry_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder the entries of a playlist.
///
/// Same body and rules as album reordering, with playlist entry ids.
///
/// # Access Control
/// - The playlist's owner or an admin
///
/// # Returns
/// - `200 OK` - Positions updated
/// - `400 Bad Request` - Body is not an array or fails validation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither owner nor admin
/// - `404 Not Found` - Playlist does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/playlists/{playlist_id}/reorder",
    tag = PLAYLIST_TAG,
    params(
        ("playlist_id" = String, Path, description = "Playlist ID")
    ),
    request_body = Vec<ReorderItemDto>,
    responses(
        (status = 200, description = "Entries reordered", body = MessageDto),
        (status = 400, description = "Invalid reorder request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_playlist(
    State(state): State<AppState>,
    session: Session,
    Path(playlist_id): Path<String>,
    payload: Result<Json<Vec<ReorderItemDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(items) = payload?;

    PlaylistService::new(&state.db)
        .reorder(
            &user,
            &playlist_id,
            items.into_iter().map(ReorderItem::from_dto).collect(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Playlist reordered".to_string(),
        }),
    ))
}
