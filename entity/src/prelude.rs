pub use super::album::Entity as Album;
pub use super::comment::Entity as Comment;
pub use super::gallery_item::Entity as GalleryItem;
pub use super::playlist::Entity as Playlist;
pub use super::playlist_track::Entity as PlaylistTrack;
pub use super::track::Entity as Track;
pub use super::user::Entity as User;
