use crate::{
    client::{
        api::helper::{delete, parse_empty_response, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::track::{TrackDto, UpdateTrackDto},
};

pub async fn update_track(track_id: String, title: String) -> Result<TrackDto, ApiError> {
    let url = format!("/api/tracks/{}", track_id);
    let body = serialize_json(&UpdateTrackDto { title })?;

    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_track(track_id: String) -> Result<(), ApiError> {
    let url = format!("/api/tracks/{}", track_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
