use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        sync::SyncReportDto,
        user::{CreateUserDto, PaginatedUsersDto, SetAdminDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{
            sync::SyncService,
            user::{CreateUserRequest, UserService},
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get paginated list of all users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Page of users ordered by username
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Create a member account.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid fields or username taken
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create_user(CreateUserRequest {
            username: payload.username,
            display_name: payload.display_name,
            password: payload.password,
            admin: payload.admin,
        })
        .await?;

    tracing::info!("{} created user {}", admin.username, user.username);

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Grant or revoke admin privileges.
///
/// # Access Control
/// - `Admin` - Only admins can change privileges; nobody can revoke their own
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Attempt to revoke your own admin privileges
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/admin",
    tag = ADMIN_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Cannot revoke own admin privileges", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_admin(&admin.id, &user_id, payload.admin)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account.
///
/// # Access Control
/// - `Admin` - Only admins can delete accounts; nobody can delete themselves
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - Attempt to delete your own account
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    tag = ADMIN_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .delete_user(&admin.id, &user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reconcile albums with the folders in object storage.
///
/// Imports folders without an album and removes albums whose folder disappeared.
/// Runs synchronously; large buckets make this request slow.
///
/// # Access Control
/// - `Admin` - Only admins can trigger a sync
///
/// # Returns
/// - `200 OK` - Report of what changed and which folders failed
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Storage listing or database error
#[utoipa::path(
    post,
    path = "/api/admin/sync",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Sync finished", body = SyncReportDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_storage(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    tracing::info!("Storage sync started by {}", admin.username);

    let report = SyncService::new(&state.db, state.storage.as_ref())
        .run()
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
