use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post_form, put, send_request,
            serialize_json,
        },
        model::{error::ApiError, upload::SelectedFile},
    },
    model::gallery::{GalleryItemDto, PaginatedGalleryDto, UpdateGalleryItemDto},
};

pub async fn get_gallery(page: u64, entries: u64) -> Result<PaginatedGalleryDto, ApiError> {
    let url = format!("/api/gallery?page={}&entries={}", page, entries);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn upload_gallery_item(
    file: SelectedFile,
    caption: Option<String>,
) -> Result<GalleryItemDto, ApiError> {
    let request = post_form("/api/gallery", &file, &[("caption", caption.as_deref())])?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_gallery_item(
    item_id: String,
    caption: Option<String>,
) -> Result<GalleryItemDto, ApiError> {
    let url = format!("/api/gallery/{}", item_id);
    let body = serialize_json(&UpdateGalleryItemDto { caption })?;

    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_gallery_item(item_id: String) -> Result<(), ApiError> {
    let url = format!("/api/gallery/{}", item_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
