use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        track::{TrackDto, UpdateTrackDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::track::TrackService,
        state::AppState,
    },
};

/// Tag for grouping track endpoints in OpenAPI documentation
pub static TRACK_TAG: &str = "track";

/// Get a single track.
///
/// # Returns
/// - `200 OK` - The track
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Track does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tracks/{track_id}",
    tag = TRACK_TAG,
    params(
        ("track_id" = String, Path, description = "Track ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved track", body = TrackDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_track(
    State(state): State<AppState>,
    session: Session,
    Path(track_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let track = TrackService::new(&state.db, state.storage.as_ref())
        .get_by_id(&track_id)
        .await?;

    Ok((StatusCode::OK, Json(track.into_dto())))
}

/// Rename a track.
///
/// # Access Control
/// - `Admin` - Only admins can edit tracks
///
/// # Returns
/// - `200 OK` - The updated track
/// - `400 Bad Request` - Empty title
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Track does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tracks/{track_id}",
    tag = TRACK_TAG,
    params(
        ("track_id" = String, Path, description = "Track ID")
    ),
    request_body = UpdateTrackDto,
    responses(
        (status = 200, description = "Successfully updated track", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_track(
    State(state): State<AppState>,
    session: Session,
    Path(track_id): Path<String>,
    Json(payload): Json<UpdateTrackDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let track = TrackService::new(&state.db, state.storage.as_ref())
        .update_title(&track_id, &payload.title)
        .await?;

    Ok((StatusCode::OK, Json(track.into_dto())))
}

/// Delete a track, its playlist entries and its file.
///
/// Remaining tracks keep their positions.
///
/// # Access Control
/// - `Admin` - Only admins can delete tracks
///
/// # Returns
/// - `204 No Content` - Track deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Track does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tracks/{track_id}",
    tag = TRACK_TAG,
    params(
        ("track_id" = String, Path, description = "Track ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted track"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_track(
    State(state): State<AppState>,
    session: Session,
    Path(track_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TrackService::new(&state.db, state.storage.as_ref())
        .delete(&track_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
