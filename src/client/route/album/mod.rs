mod comments;
mod modals;
mod tracks;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            AudioPlayer, ConfirmationModal, Markdown, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
    },
    model::{album::AlbumDto, track::TrackDto},
};

use comments::Comments;
use modals::{EditAlbumModal, UploadTrackModal};
use tracks::TrackList;

#[cfg(feature = "web")]
use crate::client::api::album::{delete_album, get_album};

/// Album page with its track list, player and comments.
#[component]
pub fn Album(id: String) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let is_admin = user_store.read().user.as_ref().is_some_and(|u| u.admin);
    let nav = navigator();

    let mut album = use_signal(|| None::<AlbumDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);
    let now_playing = use_signal(|| None::<TrackDto>);

    let mut show_edit_modal = use_signal(|| false);
    let mut show_upload_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|(id,)| async move {
        let _ = refetch_trigger();
        get_album(id).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    album.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch album: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match album.peek().as_ref() {
                Some(data) => Some(delete_album(data.id.clone()).await),
                None => None,
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    is_deleting.set(false);
                    show_delete_modal.set(false);
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("Failed to delete album: {}", err);
                    is_deleting.set(false);
                }
            }
        }
    });

    rsx! {
        if let Some(data) = album() {
            Title { "{data.title} | {SITE_NAME}" }
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-5xl flex flex-col gap-6",
                    div {
                        class: "flex flex-col sm:flex-row sm:items-start justify-between gap-4",
                        div {
                            Link { to: Route::Home {}, class: "link text-sm opacity-70", "← Albums" }
                            h1 { class: "text-2xl font-semibold mt-2", "{data.title}" }
                            p {
                                class: "opacity-70",
                                {data.artist.clone().unwrap_or_default()}
                                if let Some(year) = data.year {
                                    " · {year}"
                                }
                            }
                            p { class: "text-xs opacity-50 font-mono", "{data.name}/" }
                        }
                        if is_admin {
                            div {
                                class: "flex gap-2",
                                button {
                                    class: "btn btn-primary btn-sm",
                                    onclick: move |_| show_upload_modal.set(true),
                                    "Upload Track"
                                }
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: move |_| show_edit_modal.set(true),
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-error btn-sm",
                                    onclick: move |_| show_delete_modal.set(true),
                                    "Delete"
                                }
                            }
                        }
                    }
                    if let Some(description) = data.description.clone() {
                        Markdown { text: description, class: "opacity-90" }
                    }
                    TrackList {
                        album: data.clone(),
                        is_admin,
                        now_playing,
                        refetch_trigger,
                    }
                    if let Some(track) = now_playing() {
                        AudioPlayer {
                            title: track.title.clone(),
                            subtitle: Some(data.title.clone()),
                            file_key: track.file_key.clone(),
                        }
                    }
                    Comments { album_id: data.id.clone() }
                }
            }
            if is_admin {
                EditAlbumModal { show: show_edit_modal, album: data.clone(), refetch_trigger }
                UploadTrackModal { show: show_upload_modal, album_id: data.id.clone(), refetch_trigger }
                ConfirmationModal {
                    show: show_delete_modal,
                    title: "Delete Album".to_string(),
                    message: rsx!(
                        p {
                            class: "py-4",
                            "Delete "
                            span { class: "font-bold", "\"{data.title}\"" }
                            " with all {data.tracks.len()} tracks? The audio files are removed from storage."
                        }
                    ),
                    is_processing: is_deleting(),
                    on_confirm: move |_| {
                        is_deleting.set(true);
                    },
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
