pub mod admin;
pub mod album;
pub mod gallery;
pub mod home;
pub mod login;
pub mod not_found;
pub mod playlist;
pub mod playlists;
pub mod setup;

pub use admin::Admin;
pub use album::Album;
pub use gallery::Gallery;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use playlist::Playlist;
pub use playlists::Playlists;
pub use setup::Setup;
