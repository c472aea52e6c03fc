use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{Admin, Album, Gallery, Home, Login, NotFound, Playlist, Playlists, Setup};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[route("/setup")]
    Setup {},

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    Home {},

    #[route("/albums/:id")]
    Album { id: String },

    #[route("/playlists")]
    Playlists {},

    #[route("/playlists/:id")]
    Playlist { id: String },

    #[route("/gallery")]
    Gallery {},

    #[end_layout]

    #[layout(RequiresAdmin)]
    #[route("/admin")]
    Admin {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
