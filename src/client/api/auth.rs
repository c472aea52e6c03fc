use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{LoginDto, SetupDto, UserDto},
};

/// Fetches the session user. A 404 means nobody is logged in.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;

    match parse_response(response).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn login(username: String, password: String) -> Result<UserDto, ApiError> {
    let payload = LoginDto { username, password };
    let body = serialize_json(&payload)?;

    let request = post("/api/auth/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn setup(payload: SetupDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;

    let request = post("/api/auth/setup").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
