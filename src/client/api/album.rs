use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, post_form, put,
            send_request, serialize_json,
        },
        model::{error::ApiError, upload::SelectedFile},
    },
    model::{
        album::{AlbumDto, CreateAlbumDto, PaginatedAlbumsDto, UpdateAlbumDto},
        reorder::ReorderItemDto,
        track::TrackDto,
    },
};

pub async fn get_albums(page: u64, entries: u64) -> Result<PaginatedAlbumsDto, ApiError> {
    let url = format!("/api/albums?page={}&entries={}", page, entries);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_album(album_id: String) -> Result<AlbumDto, ApiError> {
    let url = format!("/api/albums/{}", album_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_album(payload: CreateAlbumDto) -> Result<AlbumDto, ApiError> {
    let body = serialize_json(&payload)?;

    let request = post("/api/albums").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_album(album_id: String, payload: UpdateAlbumDto) -> Result<AlbumDto, ApiError> {
    let url = format!("/api/albums/{}", album_id);
    let body = serialize_json(&payload)?;

    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_album(album_id: String) -> Result<(), ApiError> {
    let url = format!("/api/albums/{}", album_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn reorder_tracks(album_id: String, items: Vec<ReorderItemDto>) -> Result<(), ApiError> {
    let url = format!("/api/albums/{}/reorder", album_id);
    let body = serialize_json(&items)?;

    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn upload_track(
    album_id: String,
    file: SelectedFile,
    title: Option<String>,
) -> Result<TrackDto, ApiError> {
    let url = format!("/api/albums/{}/tracks", album_id);

    let request = post_form(&url, &file, &[("title", title.as_deref())])?;
    let response = send_request(request).await?;
    parse_response(response).await
}
