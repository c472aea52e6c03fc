use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, album, auth, comment, gallery, media, playlist, track},
    docs::ApiDoc,
    service::gallery::MAX_GALLERY_UPLOAD_BYTES,
    state::AppState,
};

/// Headroom for multipart boundaries and the text parts next to the file.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn router() -> Router<AppState> {
    let upload_limit = DefaultBodyLimit::max(MAX_GALLERY_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/setup", post(auth::setup))
        .route(
            "/api/admin/users",
            get(admin::get_users).post(admin::create_user),
        )
        .route("/api/admin/users/{user_id}", delete(admin::delete_user))
        .route("/api/admin/users/{user_id}/admin", put(admin::set_admin))
        .route("/api/admin/sync", post(admin::sync_storage))
        .route("/api/albums", get(album::get_albums).post(album::create_album))
        .route(
            "/api/albums/{album_id}",
            get(album::get_album)
                .put(album::update_album)
                .delete(album::delete_album),
        )
        .route("/api/albums/{album_id}/reorder", post(album::reorder_tracks))
        .route(
            "/api/albums/{album_id}/tracks",
            post(album::upload_track).layer(upload_limit),
        )
        .route(
            "/api/albums/{album_id}/comments",
            get(comment::get_comments).post(comment::create_comment),
        )
        .route(
            "/api/tracks/{track_id}",
            get(track::get_track)
                .put(track::update_track)
                .delete(track::delete_track),
        )
        .route(
            "/api/comments/{comment_id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .route(
            "/api/playlists",
            get(playlist::get_playlists).post(playlist::create_playlist),
        )
        .route(
            "/api/playlists/{playlist_id}",
            get(playlist::get_playlist)
                .put(playlist::update_playlist)
                .delete(playlist::delete_playlist),
        )
        .route(
            "/api/playlists/{playlist_id}/tracks",
            post(playlist::add_playlist_track),
        )
        .route(
            "/api/playlists/{playlist_id}/tracks/{entry_id}",
            delete(playlist::remove_playlist_track),
        )
        .route(
            "/api/playlists/{playlist_id}/reorder",
            post(playlist::reorder_playlist),
        )
        .route(
            "/api/gallery",
            get(gallery::get_gallery).post(gallery::upload_gallery_item).layer(upload_limit),
        )
        .route(
            "/api/gallery/{item_id}",
            put(gallery::update_gallery_item).delete(gallery::delete_gallery_item),
        )
        .route("/api/media/{*key}", get(media::get_media))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
