use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{FileInput, Modal},
        model::upload::SelectedFile,
    },
    model::{album::AlbumDto, playlist::PlaylistSummaryDto, track::TrackDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        album::{update_album, upload_track},
        playlist::{add_playlist_track, get_playlists},
        track::update_track,
    },
    model::album::UpdateAlbumDto,
};

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[component]
fn ModalActions(
    mut show: Signal<bool>,
    is_submitting: bool,
    submit_text: &'static str,
    processing_text: &'static str,
) -> Element {
    rsx!(
        div {
            class: "modal-action",
            button {
                r#type: "button",
                class: "btn",
                disabled: is_submitting,
                onclick: move |_| show.set(false),
                "Cancel"
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: is_submitting,
                if is_submitting {
                    span { class: "loading loading-spinner loading-sm mr-2" }
                    "{processing_text}"
                } else {
                    "{submit_text}"
                }
            }
        }
    )
}

#[component]
fn ErrorAlert(message: Option<String>) -> Element {
    rsx!(
        if let Some(err) = message {
            div {
                class: "alert alert-error",
                span { "{err}" }
            }
        }
    )
}

#[component]
pub fn EditAlbumModal(
    mut show: Signal<bool>,
    album: AlbumDto,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut album_id = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut artist = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Load the current values when the modal opens
    use_effect(use_reactive!(|(album,)| {
        if show() {
            album_id.set(album.id.clone());
            title.set(album.title.clone());
            artist.set(album.artist.clone().unwrap_or_default());
            year.set(album.year.map(|y| y.to_string()).unwrap_or_default());
            description.set(album.description.clone().unwrap_or_default());
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let update_future = use_resource(move || async move {
        if should_submit() {
            let payload = UpdateAlbumDto {
                title: title(),
                artist: optional(artist()),
                year: year().trim().parse().ok(),
                description: optional(description()),
            };
            Some(update_album(album_id(), payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = update_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to update album: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let is_submitting = should_submit();

    rsx! {
        Modal {
            show,
            title: "Edit Album".to_string(),
            wide: true,
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if title().trim().is_empty() {
                        error_message.set(Some("Title is required".to_string()));
                        return;
                    }
                    if !year().trim().is_empty() && year().trim().parse::<i32>().is_err() {
                        error_message.set(Some("Year must be a number".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Title",
                    value: "{title}",
                    disabled: is_submitting,
                    oninput: move |evt| title.set(evt.value()),
                }
                div {
                    class: "flex gap-3",
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Artist",
                        value: "{artist}",
                        disabled: is_submitting,
                        oninput: move |evt| artist.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-32",
                        placeholder: "Year",
                        value: "{year}",
                        disabled: is_submitting,
                        oninput: move |evt| year.set(evt.value()),
                    }
                }
                textarea {
                    class: "textarea textarea-bordered w-full h-32",
                    placeholder: "Description (markdown)",
                    value: "{description}",
                    disabled: is_submitting,
                    oninput: move |evt| description.set(evt.value()),
                }
                ErrorAlert { message: error_message() }
                ModalActions { show, is_submitting, submit_text: "Save", processing_text: "Saving..." }
            }
        }
    }
}

#[component]
pub fn UploadTrackModal(
    mut show: Signal<bool>,
    album_id: String,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut target_album = use_signal(String::new);
    let mut selected = use_signal(|| None::<SelectedFile>);
    let mut title = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(use_reactive!(|(album_id,)| {
        if show() {
            target_album.set(album_id);
            selected.set(None);
            title.set(String::new());
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let upload_future = use_resource(move || async move {
        if should_submit() {
            match selected.peek().clone() {
                Some(file) => Some(upload_track(target_album(), file, optional(title())).await),
                None => None,
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = upload_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to upload track: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let is_submitting = should_submit();

    rsx! {
        Modal {
            show,
            title: "Upload Track".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if selected.read().is_none() {
                        error_message.set(Some("Choose an audio file".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                FileInput { selected, error_message, accept: "audio/*", disabled: is_submitting }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Title (defaults to the file name)",
                    value: "{title}",
                    disabled: is_submitting,
                    oninput: move |evt| title.set(evt.value()),
                }
                ErrorAlert { message: error_message() }
                ModalActions { show, is_submitting, submit_text: "Upload", processing_text: "Uploading..." }
            }
        }
    }
}

#[component]
pub fn RenameTrackModal(
    mut show: Signal<bool>,
    track: Option<TrackDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut track_id = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(use_reactive!(|(track,)| {
        if show() {
            if let Some(track) = track {
                track_id.set(track.id);
                title.set(track.title);
            }
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let rename_future = use_resource(move || async move {
        if should_submit() {
            Some(update_track(track_id(), title()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = rename_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to rename track: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let is_submitting = should_submit();

    rsx! {
        Modal {
            show,
            title: "Rename Track".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if title().trim().is_empty() {
                        error_message.set(Some("Title is required".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                input {
                    class: "input input-bordered w-full",
                    value: "{title}",
                    disabled: is_submitting,
                    oninput: move |evt| title.set(evt.value()),
                }
                ErrorAlert { message: error_message() }
                ModalActions { show, is_submitting, submit_text: "Save", processing_text: "Saving..." }
            }
        }
    }
}

/// Appends a track to one of the playlists.
///
/// Every member sees every playlist here; the server rejects playlists the user
/// may not change.
#[component]
pub fn AddToPlaylistModal(mut show: Signal<bool>, track: Option<TrackDto>) -> Element {
    let mut playlists = use_signal(|| None::<Vec<PlaylistSummaryDto>>);
    let mut track_id = use_signal(String::new);
    let mut selected_playlist = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(use_reactive(&(track.clone(),), move |(track,)| {
        if show() {
            if let Some(track) = track {
                track_id.set(track.id);
            }
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        if show() {
            get_playlists().await.ok()
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(data)) = fetch_future.read_unchecked().as_ref() {
            if selected_playlist.peek().is_empty() {
                if let Some(first) = data.first() {
                    selected_playlist.set(first.id.clone());
                }
            }
            playlists.set(Some(data.clone()));
        }
    });

    #[cfg(feature = "web")]
    let add_future = use_resource(move || async move {
        if should_submit() {
            Some(add_playlist_track(selected_playlist(), track_id()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = add_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => show.set(false),
                Err(err) => {
                    tracing::error!("Failed to add track to playlist: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let is_submitting = should_submit();
    let track_title = track.map(|t| t.title).unwrap_or_default();

    rsx! {
        Modal {
            show,
            title: "Add to Playlist".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if selected_playlist().is_empty() {
                        error_message.set(Some("Choose a playlist".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                p { class: "opacity-70", "{track_title}" }
                match playlists() {
                    None => rsx! {
                        span { class: "loading loading-spinner loading-sm" }
                    },
                    Some(list) if list.is_empty() => rsx! {
                        p { class: "opacity-50", "No playlists yet. Create one on the playlists page." }
                    },
                    Some(list) => rsx! {
                        select {
                            class: "select select-bordered w-full",
                            value: "{selected_playlist}",
                            disabled: is_submitting,
                            onchange: move |evt| selected_playlist.set(evt.value()),
                            for playlist in list {
                                option {
                                    key: "{playlist.id}",
                                    value: "{playlist.id}",
                                    "{playlist.name} ({playlist.entry_count})"
                                }
                            }
                        }
                    },
                }
                ErrorAlert { message: error_message() }
                ModalActions { show, is_submitting, submit_text: "Add", processing_text: "Adding..." }
            }
        }
    }
}
