use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Modal, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::playlist::PlaylistSummaryDto,
};

#[cfg(feature = "web")]
use crate::{client::api::playlist::{create_playlist, get_playlists}, model::playlist::CreatePlaylistDto};

/// Every playlist of the band, ordered by name.
#[component]
pub fn Playlists() -> Element {
    let mut playlists = use_signal(|| None::<Vec<PlaylistSummaryDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_playlists().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    playlists.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch playlists: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Playlists | {SITE_NAME}" }
        if let Some(list) = playlists() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-5xl",
                    div {
                        class: "flex items-center justify-between gap-4 mb-6",
                        h1 { class: "text-lg sm:text-2xl", "Playlists" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create_modal.set(true),
                            "New Playlist"
                        }
                    }
                    if list.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No playlists yet"
                        }
                    } else {
                        div {
                            class: "flex flex-col gap-2",
                            for playlist in list {
                                Link {
                                    key: "{playlist.id}",
                                    to: Route::Playlist { id: playlist.id.clone() },
                                    class: "card bg-base-200 hover:bg-base-300 transition-colors",
                                    div {
                                        class: "card-body py-4 flex flex-row items-center justify-between",
                                        div {
                                            h2 { class: "font-semibold", "{playlist.name}" }
                                            if let Some(description) = playlist.description.clone() {
                                                p { class: "text-sm opacity-70", "{description}" }
                                            }
                                        }
                                        span { class: "badge", "{playlist.entry_count} tracks" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            CreatePlaylistModal { show: show_create_modal, refetch_trigger }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn CreatePlaylistModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(move || {
        if show() {
            name.set(String::new());
            description.set(String::new());
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let create_future = use_resource(move || async move {
        if should_submit() {
            let payload = CreatePlaylistDto {
                name: name(),
                description: Some(description()).filter(|d| !d.trim().is_empty()),
            };
            Some(create_playlist(payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = create_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create playlist: {}", err);
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
            title: "New Playlist".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if name().trim().is_empty() {
                        error_message.set(Some("Name is required".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name",
                    value: "{name}",
                    disabled: is_submitting,
                    oninput: move |evt| name.set(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Description",
                    value: "{description}",
                    disabled: is_submitting,
                    oninput: move |evt| description.set(evt.value()),
                }
                if let Some(err) = error_message() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }
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
                        "Create"
                    }
                }
            }
        }
    }
}
