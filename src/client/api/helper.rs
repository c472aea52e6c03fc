use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::model::{error::ApiError, upload::SelectedFile},
    model::api::ErrorDto,
};

async fn parse_error(response: Response, status: u64) -> ApiError {
    let body_message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => Some(error_dto.error),
        Err(_) => response.text().await.ok(),
    };

    ApiError::from_response(status, body_message)
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::client(format!("Failed to parse response: {}", e)))
    } else {
        Err(parse_error(response, status).await)
    }
}

/// Helper function to parse empty success responses (204 No Content, 201 Created, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(parse_error(response, status).await)
    }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

/// Create a multipart POST request with a `file` part and optional text parts.
///
/// The browser sets the multipart boundary, so no content type header is added here.
pub fn post_form(
    url: &str,
    file: &SelectedFile,
    fields: &[(&str, Option<&str>)],
) -> Result<Request, ApiError> {
    let form_error = |e| ApiError::client(format!("Failed to build upload form: {:?}", e));

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.data.as_slice()));

    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = &file.content_type {
        options.set_type(content_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(form_error)?;

    let form = web_sys::FormData::new().map_err(form_error)?;
    for (name, value) in fields {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            form.append_with_str(name, value).map_err(form_error)?;
        }
    }
    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(form_error)?;

    Ok(Request::post(url)
        .credentials(RequestCredentials::Include)
        .body(form))
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::client(format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::client(format!("Failed to serialize request: {}", e)))
}
