use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowDown, FaArrowUp, FaPlay, FaXmark},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            format_duration, move_item,
            page::{ErrorPage, LoadingPage},
            AudioPlayer, ConfirmationModal, Modal, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
    },
    model::playlist::{PlaylistDto, PlaylistEntryDto},
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::playlist::{
            delete_playlist, get_playlist, remove_playlist_track, reorder_playlist,
            update_playlist,
        },
        component::reorder_payload,
    },
    model::playlist::UpdatePlaylistDto,
};

fn entry_ids(entries: &[PlaylistEntryDto]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.clone()).collect()
}

/// Playlist page. The owner and admins may edit, reorder and remove entries.
#[component]
pub fn Playlist(id: String) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let current_user = user_store.read().user.clone();
    let nav = navigator();

    let mut playlist = use_signal(|| None::<PlaylistDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut order = use_signal(Vec::<PlaylistEntryDto>::new);
    let mut now_playing = use_signal(|| None::<PlaylistEntryDto>);
    let mut action_error = use_signal(|| None::<String>);

    let mut should_save_order = use_signal(|| false);
    let mut entry_to_remove = use_signal(|| None::<String>);
    let mut show_edit_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|(id,)| async move {
        let _ = refetch_trigger();
        get_playlist(id).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    order.set(data.entries.clone());
                    playlist.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch playlist: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    #[cfg(feature = "web")]
    let reorder_future = use_resource(move || async move {
        if !should_save_order() {
            return None;
        }
        let loaded = playlist.peek().clone()?;
        let original: Vec<(String, i32)> = loaded
            .entries
            .iter()
            .map(|entry| (entry.id.clone(), entry.position))
            .collect();
        let payload = reorder_payload(&original, &entry_ids(&order.peek()));
        Some(reorder_playlist(loaded.id, payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = reorder_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    action_error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => action_error.set(Some(err.message.clone())),
            }
            should_save_order.set(false);
        }
    });

    #[cfg(feature = "web")]
    let remove_future = use_resource(move || async move {
        let entry_id = entry_to_remove()?;
        let playlist_id = playlist.peek().as_ref()?.id.clone();
        Some(remove_playlist_track(playlist_id, entry_id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = remove_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    action_error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => action_error.set(Some(err.message.clone())),
            }
            entry_to_remove.set(None);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let playlist_id = playlist.peek().as_ref()?.id.clone();
        Some(delete_playlist(playlist_id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    show_delete_modal.set(false);
                    nav.push(Route::Playlists {});
                }
                Err(err) => {
                    tracing::error!("Failed to delete playlist: {}", err);
                    action_error.set(Some(err.message.clone()));
                    show_delete_modal.set(false);
                }
            }
            is_deleting.set(false);
        }
    });

    let Some(data) = playlist() else {
        return rsx! {
            if let Some(err) = error() {
                ErrorPage { status: err.status, message: err.message }
            } else {
                LoadingPage {}
            }
        };
    };

    let can_modify = current_user
        .as_ref()
        .is_some_and(|u| u.admin || u.id == data.owner_id);
    let is_dirty = entry_ids(&order.read()) != entry_ids(&data.entries);
    let is_busy = should_save_order() || entry_to_remove().is_some();
    let entry_count = order.read().len();
    let playing_id = now_playing().map(|entry| entry.id);
    let loaded_entries = data.entries.clone();

    rsx! {
        Title { "{data.name} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-6",
                div {
                    class: "flex flex-col sm:flex-row sm:items-start justify-between gap-4",
                    div {
                        Link { to: Route::Playlists {}, class: "link text-sm opacity-70", "← Playlists" }
                        h1 { class: "text-2xl font-semibold mt-2", "{data.name}" }
                        if let Some(description) = data.description.clone() {
                            p { class: "opacity-70", "{description}" }
                        }
                    }
                    if can_modify {
                        div {
                            class: "flex gap-2",
                            if is_dirty {
                                button {
                                    class: "btn btn-sm",
                                    disabled: is_busy,
                                    onclick: move |_| order.set(loaded_entries.clone()),
                                    "Reset"
                                }
                                button {
                                    class: "btn btn-sm btn-primary",
                                    disabled: is_busy,
                                    onclick: move |_| should_save_order.set(true),
                                    "Save Order"
                                }
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
                if let Some(err) = action_error() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        if entry_count == 0 {
                            div {
                                class: "text-center py-8 opacity-50",
                                "This playlist is empty. Add tracks from an album page."
                            }
                        } else {
                            table {
                                class: "table w-full",
                                tbody {
                                    for (index, entry) in order().into_iter().enumerate() {
                                        {
                                            let is_playing = playing_id.as_deref() == Some(entry.id.as_str());
                                            let play_entry = entry.clone();
                                            let remove_id = entry.id.clone();
                                            rsx! {
                                                tr {
                                                    key: "{entry.id}",
                                                    class: if is_playing { "bg-base-300" } else { "" },
                                                    td { class: "w-10 opacity-50", "{index + 1}" }
                                                    td {
                                                        button {
                                                            class: "btn btn-ghost btn-xs flex gap-2 items-center",
                                                            onclick: move |_| now_playing.set(Some(play_entry.clone())),
                                                            Icon { width: 12, height: 12, icon: FaPlay }
                                                            span { "{entry.track_title}" }
                                                        }
                                                    }
                                                    td {
                                                        Link {
                                                            to: Route::Album { id: entry.album_id.clone() },
                                                            class: "link link-hover text-sm opacity-70",
                                                            "{entry.album_title}"
                                                        }
                                                    }
                                                    td {
                                                        class: "text-right opacity-70",
                                                        {format_duration(entry.duration_seconds)}
                                                    }
                                                    if can_modify {
                                                        td {
                                                            div {
                                                                class: "flex gap-1 justify-end",
                                                                button {
                                                                    class: "btn btn-ghost btn-xs",
                                                                    disabled: index == 0 || is_busy,
                                                                    onclick: move |_| move_item(&mut order.write(), index, -1),
                                                                    Icon { width: 12, height: 12, icon: FaArrowUp }
                                                                }
                                                                button {
                                                                    class: "btn btn-ghost btn-xs",
                                                                    disabled: index + 1 == entry_count || is_busy,
                                                                    onclick: move |_| move_item(&mut order.write(), index, 1),
                                                                    Icon { width: 12, height: 12, icon: FaArrowDown }
                                                                }
                                                                button {
                                                                    class: "btn btn-ghost btn-xs text-error",
                                                                    title: "Remove from playlist",
                                                                    disabled: is_busy || is_dirty,
                                                                    onclick: move |_| entry_to_remove.set(Some(remove_id.clone())),
                                                                    Icon { width: 12, height: 12, icon: FaXmark }
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if let Some(entry) = now_playing() {
                    AudioPlayer {
                        title: entry.track_title.clone(),
                        subtitle: Some(entry.album_title.clone()),
                        file_key: entry.file_key.clone(),
                    }
                }
            }
        }
        if can_modify {
            EditPlaylistModal { show: show_edit_modal, playlist: data.clone(), refetch_trigger }
            ConfirmationModal {
                show: show_delete_modal,
                title: "Delete Playlist".to_string(),
                message: rsx!(
                    p {
                        class: "py-4",
                        "Delete "
                        span { class: "font-bold", "\"{data.name}\"" }
                        "? The tracks stay in their albums."
                    }
                ),
                is_processing: is_deleting(),
                on_confirm: move |_| {
                    is_deleting.set(true);
                },
            }
        }
    }
}

#[component]
fn EditPlaylistModal(
    mut show: Signal<bool>,
    playlist: PlaylistDto,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut playlist_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(use_reactive!(|(playlist,)| {
        if show() {
            playlist_id.set(playlist.id.clone());
            name.set(playlist.name.clone());
            description.set(playlist.description.clone().unwrap_or_default());
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let update_future = use_resource(move || async move {
        if should_submit() {
            let payload = UpdatePlaylistDto {
                name: name(),
                description: Some(description()).filter(|d| !d.trim().is_empty()),
            };
            Some(update_playlist(playlist_id(), payload).await)
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
                Err(err) => error_message.set(Some(err.message.clone())),
            }
            should_submit.set(false);
        }
    });

    let is_submitting = should_submit();

    rsx! {
        Modal {
            show,
            title: "Edit Playlist".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if name().trim().is_empty() {
                        error_message.set(Some("Name is required".to_string()));
                        return;
                    }
                    should_submit.set(true);
                },
                input {
                    class: "input input-bordered w-full",
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
                        "Save"
                    }
                }
            }
        }
    }
}
