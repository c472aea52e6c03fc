use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, SetupDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        service::{
            auth::{AuthService, SetupAdminParam},
            user::UserService,
        },
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// On success the user's id is stored in a fresh session.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(&user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current user.
///
/// Clears the session and redirects to the login page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirecting to /login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::temporary("/login"))
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The session user
/// - `404 Not Found` - Nobody is logged in, or the user was deleted
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    let user = UserService::new(&state.db)
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create the first admin account with the setup code.
///
/// The setup code is printed to the server log at startup while no admin exists.
/// The new admin is logged in immediately.
///
/// # Returns
/// - `200 OK` - The created admin
/// - `400 Bad Request` - Wrong or expired code, admin already exists, or invalid fields
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/setup",
    tag = AUTH_TAG,
    request_body = SetupDto,
    responses(
        (status = 200, description = "Admin created and logged in", body = UserDto),
        (status = 400, description = "Invalid setup code or account fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .setup_admin(
            &state.admin_code_service,
            SetupAdminParam {
                code: payload.code,
                username: payload.username,
                display_name: payload.display_name,
                password: payload.password,
            },
        )
        .await?;

    AuthSession::new(&session).set_user_id(&user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
