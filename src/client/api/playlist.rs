use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        playlist::{
            AddPlaylistTrackDto, CreatePlaylistDto, PlaylistDto, PlaylistSummaryDto,
            UpdatePlaylistDto,
        },
        reorder::ReorderItemDto,
    },
};

pub async fn get_playlists() -> Result<Vec<PlaylistSummaryDto>, ApiError> {
    let request = get("/api/playlists");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_playlist(playlist_id: String) -> Result<PlaylistDto, ApiError> {
    let url = format!("/api/playlists/{}", playlist_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_playlist(payload: CreatePlaylistDto) -> Result<PlaylistDto, ApiError> {
    let body = serialize_json(&payload)?;

    let request = post("/api/playlists").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_playlist(
    playlist_id: String,
    payload: UpdatePlaylistDto,
) -> Result<PlaylistDto, ApiError> {
    let url = format!("/api/playlists/{}", playlist_id);
    let body = serialize_json(&payload)?;

    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_playlist(playlist_id: String) -> Result<(), ApiError> {
    let url = format!("/api/playlists/{}", playlist_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn add_playlist_track(playlist_id: String, track_id: String) -> Result<PlaylistDto, ApiError> {
    let url = format!("/api/playlists/{}/tracks", playlist_id);
    let body = serialize_json(&AddPlaylistTrackDto { track_id })?;

    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn remove_playlist_track(playlist_id: String, entry_id: String) -> Result<(), ApiError> {
    let url = format!("/api/playlists/{}/tracks/{}", playlist_id, entry_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn reorder_playlist(playlist_id: String, items: Vec<ReorderItemDto>) -> Result<(), ApiError> {
    let url = format!("/api/playlists/{}/reorder", playlist_id);
    let body = serialize_json(&items)?;

    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
