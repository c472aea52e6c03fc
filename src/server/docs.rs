//! OpenAPI document for the JSON API, served through Swagger UI at `/api/docs`.

use utoipa::OpenApi;

use crate::server::controller::{
    admin::{self, ADMIN_TAG},
    album::{self, ALBUM_TAG},
    auth::{self, AUTH_TAG},
    comment::{self, COMMENT_TAG},
    gallery::{self, GALLERY_TAG},
    media::{self, MEDIA_TAG},
    playlist::{self, PLAYLIST_TAG},
    track::{self, TRACK_TAG},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "bandvault", description = "Private band music archive API"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        auth::setup,
        admin::get_users,
        admin::create_user,
        admin::set_admin,
        admin::delete_user,
        admin::sync_storage,
        album::get_albums,
        album::create_album,
        album::get_album,
        album::update_album,
        album::delete_album,
        album::reorder_tracks,
        album::upload_track,
        track::get_track,
        track::update_track,
        track::delete_track,
        comment::get_comments,
        comment::create_comment,
        comment::update_comment,
        comment::delete_comment,
        playlist::get_playlists,
        playlist::create_playlist,
        playlist::get_playlist,
        playlist::update_playlist,
        playlist::delete_playlist,
        playlist::add_playlist_track,
        playlist::remove_playlist_track,
        playlist::reorder_playlist,
        gallery::get_gallery,
        gallery::upload_gallery_item,
        gallery::update_gallery_item,
        gallery::delete_gallery_item,
        media::get_media,
    ),
    tags(
        (name = AUTH_TAG, description = "Login, logout and first-admin setup"),
        (name = ADMIN_TAG, description = "User management and storage sync"),
        (name = ALBUM_TAG, description = "Albums, track uploads and track order"),
        (name = TRACK_TAG, description = "Individual tracks"),
        (name = COMMENT_TAG, description = "Album comments"),
        (name = PLAYLIST_TAG, description = "Shared playlists"),
        (name = GALLERY_TAG, description = "Band photos and videos"),
        (name = MEDIA_TAG, description = "Streaming proxy for stored files"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_reorder_endpoints() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/albums/{album_id}/reorder"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/playlists/{playlist_id}/reorder"));
        assert!(doc.paths.paths.contains_key("/api/media/{key}"));
    }
}
