use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::comment::{CommentBodyDto, CommentDto},
};

pub async fn get_comments(album_id: String) -> Result<Vec<CommentDto>, ApiError> {
    let url = format!("/api/albums/{}/comments", album_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_comment(album_id: String, body: String) -> Result<CommentDto, ApiError> {
    let url = format!("/api/albums/{}/comments", album_id);
    let payload = serialize_json(&CommentBodyDto { body })?;

    let request = post(&url).body(payload);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_comment(comment_id: String, body: String) -> Result<CommentDto, ApiError> {
    let url = format!("/api/comments/{}", comment_id);
    let payload = serialize_json(&CommentBodyDto { body })?;

    let request = put(&url).body(payload);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_comment(comment_id: String) -> Result<(), ApiError> {
    let url = format!("/api/comments/{}", comment_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
