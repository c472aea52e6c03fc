use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowDown, FaArrowUp, FaPlay, FaPlus},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::component::{format_duration, move_item, ConfirmationModal},
    model::{album::AlbumDto, track::TrackDto},
};

use super::modals::{AddToPlaylistModal, RenameTrackModal};

#[cfg(feature = "web")]
use crate::client::{
    api::{album::reorder_tracks, track::delete_track},
    component::reorder_payload,
};

fn ids(tracks: &[TrackDto]) -> Vec<String> {
    tracks.iter().map(|track| track.id.clone()).collect()
}

/// Tracks of an album in position order.
///
/// Admins rearrange the list locally with the arrow buttons and save it in one
/// reorder request.
#[component]
pub fn TrackList(
    album: AlbumDto,
    is_admin: bool,
    mut now_playing: Signal<Option<TrackDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut order = use_signal(|| album.tracks.clone());
    let mut album_id = use_signal(|| album.id.clone());
    let mut original = use_signal(Vec::<(String, i32)>::new);
    let mut should_save = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);

    let mut selected_track = use_signal(|| None::<TrackDto>);
    let mut show_rename_modal = use_signal(|| false);
    let mut show_playlist_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    // Reset the local order whenever the album is reloaded
    use_effect(use_reactive(&(album.clone(),), move |(album,)| {
        original.set(
            album
                .tracks
                .iter()
                .map(|track| (track.id.clone(), track.position))
                .collect(),
        );
        album_id.set(album.id.clone());
        order.set(album.tracks);
    }));

    let is_dirty = ids(&order.read()) != ids(&album.tracks);
    let loaded_tracks = album.tracks.clone();

    #[cfg(feature = "web")]
    let save_future = use_resource(move || async move {
        if should_save() {
            let payload = reorder_payload(&original.peek(), &ids(&order.peek()));
            Some(reorder_tracks(album_id.peek().clone(), payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = save_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    save_error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to reorder tracks: {}", err);
                    save_error.set(Some(err.message.clone()));
                }
            }
            should_save.set(false);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match selected_track.peek().as_ref() {
                Some(track) => Some(delete_track(track.id.clone()).await),
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
                    let deleted_id = selected_track.peek().as_ref().map(|t| t.id.clone());
                    if now_playing.peek().as_ref().map(|t| t.id.clone()) == deleted_id {
                        now_playing.set(None);
                    }
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete track: {}", err);
                }
            }
            is_deleting.set(false);
        }
    });

    let is_saving = should_save();
    let playing_id = now_playing().map(|track| track.id);
    let track_count = order.read().len();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex items-center justify-between gap-4",
                    h2 { class: "text-lg font-semibold", "Tracks" }
                    if is_admin && is_dirty {
                        div {
                            class: "flex gap-2",
                            button {
                                class: "btn btn-sm",
                                disabled: is_saving,
                                onclick: move |_| {
                                    order.set(loaded_tracks.clone());
                                    save_error.set(None);
                                },
                                "Reset"
                            }
                            button {
                                class: "btn btn-sm btn-primary",
                                disabled: is_saving,
                                onclick: move |_| should_save.set(true),
                                if is_saving {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                    "Saving..."
                                } else {
                                    "Save Order"
                                }
                            }
                        }
                    }
                }
                if let Some(err) = save_error() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }
                if track_count == 0 {
                    div {
                        class: "text-center py-8 opacity-50",
                        "No tracks yet"
                    }
                } else {
                    table {
                        class: "table w-full",
                        tbody {
                            for (index, track) in order().into_iter().enumerate() {
                                {
                                    let is_playing = playing_id.as_deref() == Some(track.id.as_str());
                                    let play_track = track.clone();
                                    let playlist_track = track.clone();
                                    let rename_track = track.clone();
                                    let track_to_delete = track.clone();
                                    rsx! {
                                        tr {
                                            key: "{track.id}",
                                            class: if is_playing { "bg-base-300" } else { "" },
                                            td {
                                                class: "w-10 opacity-50",
                                                "{index + 1}"
                                            }
                                            td {
                                                button {
                                                    class: "btn btn-ghost btn-xs flex gap-2 items-center",
                                                    onclick: move |_| now_playing.set(Some(play_track.clone())),
                                                    Icon { width: 12, height: 12, icon: FaPlay }
                                                    span { "{track.title}" }
                                                }
                                            }
                                            td {
                                                class: "text-xs opacity-60 hidden sm:table-cell",
                                                {track.codec.clone().unwrap_or_default()}
                                                if let Some(kbps) = track.bitrate_kbps {
                                                    " {kbps} kbps"
                                                }
                                            }
                                            td {
                                                class: "text-right opacity-70",
                                                {format_duration(track.duration_seconds)}
                                            }
                                            td {
                                                div {
                                                    class: "flex gap-1 justify-end",
                                                    button {
                                                        class: "btn btn-ghost btn-xs",
                                                        title: "Add to playlist",
                                                        onclick: move |_| {
                                                            selected_track.set(Some(playlist_track.clone()));
                                                            show_playlist_modal.set(true);
                                                        },
                                                        Icon { width: 12, height: 12, icon: FaPlus }
                                                    }
                                                    if is_admin {
                                                        button {
                                                            class: "btn btn-ghost btn-xs",
                                                            disabled: index == 0 || is_saving,
                                                            onclick: move |_| move_item(&mut order.write(), index, -1),
                                                            Icon { width: 12, height: 12, icon: FaArrowUp }
                                                        }
                                                        button {
                                                            class: "btn btn-ghost btn-xs",
                                                            disabled: index + 1 == track_count || is_saving,
                                                            onclick: move |_| move_item(&mut order.write(), index, 1),
                                                            Icon { width: 12, height: 12, icon: FaArrowDown }
                                                        }
                                                        button {
                                                            class: "btn btn-ghost btn-xs",
                                                            onclick: move |_| {
                                                                selected_track.set(Some(rename_track.clone()));
                                                                show_rename_modal.set(true);
                                                            },
                                                            "Rename"
                                                        }
                                                        button {
                                                            class: "btn btn-ghost btn-xs text-error",
                                                            onclick: move |_| {
                                                                selected_track.set(Some(track_to_delete.clone()));
                                                                show_delete_modal.set(true);
                                                            },
                                                            "Delete"
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

        AddToPlaylistModal { show: show_playlist_modal, track: selected_track() }
        if is_admin {
            RenameTrackModal { show: show_rename_modal, track: selected_track(), refetch_trigger }
            ConfirmationModal {
                show: show_delete_modal,
                title: "Delete Track".to_string(),
                message: rsx!(
                    if let Some(track) = selected_track() {
                        p {
                            class: "py-4",
                            "Delete "
                            span { class: "font-bold", "\"{track.title}\"" }
                            "? It is also removed from every playlist."
                        }
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
