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
        comment::{CommentBodyDto, CommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{Comment, CreateCommentParam},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comments of an album, newest first.
///
/// # Returns
/// - `200 OK` - Comments, possibly empty
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Album does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/albums/{album_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("album_id" = String, Path, description = "Album ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comments: Vec<CommentDto> = CommentService::new(&state.db)
        .get_by_album(&album_id)
        .await?
        .into_iter()
        .map(Comment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// Comment on an album.
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Body empty or longer than 2000 characters
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Album does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/albums/{album_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("album_id" = String, Path, description = "Album ID")
    ),
    request_body = CommentBodyDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<String>,
    Json(payload): Json<CommentBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParam {
            album_id,
            author_id: user.id,
            body: payload.body,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Edit a comment.
///
/// # Access Control
/// - Only the comment's author
///
/// # Returns
/// - `200 OK` - The updated comment
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not the author
/// - `404 Not Found` - Comment does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    request_body = CommentBodyDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<String>,
    Json(payload): Json<CommentBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .update(&user, &comment_id, &payload.body)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - The comment's author or an admin
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither author nor admin
/// - `404 Not Found` - Comment does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither author nor admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CommentService::new(&state.db)
        .delete(&user, &comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
