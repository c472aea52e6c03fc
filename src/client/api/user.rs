use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        sync::SyncReportDto,
        user::{CreateUserDto, PaginatedUsersDto, SetAdminDto, UserDto},
    },
};

pub async fn get_all_users(page: u64, entries: u64) -> Result<PaginatedUsersDto, ApiError> {
    let url = format!("/api/admin/users?page={}&entries={}", page, entries);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_user(payload: CreateUserDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;

    let request = post("/api/admin/users").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn set_admin(user_id: String, admin: bool) -> Result<UserDto, ApiError> {
    let url = format!("/api/admin/users/{}/admin", user_id);
    let body = serialize_json(&SetAdminDto { admin })?;

    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_user(user_id: String) -> Result<(), ApiError> {
    let url = format!("/api/admin/users/{}", user_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn sync_storage() -> Result<SyncReportDto, ApiError> {
    let request = post("/api/admin/sync");
    let response = send_request(request).await?;
    parse_response(response).await
}
