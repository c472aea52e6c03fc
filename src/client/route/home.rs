use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Modal, Page, Pagination, PaginationData,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
    },
    model::album::PaginatedAlbumsDto,
};

#[cfg(feature = "web")]
use crate::{
    client::api::album::{create_album, get_albums},
    model::album::CreateAlbumDto,
};

/// Album list, ordered by title.
#[component]
pub fn Home() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let is_admin = user_store.read().user.as_ref().is_some_and(|u| u.admin);

    let mut albums = use_signal(|| None::<PaginatedAlbumsDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 25u64);
    let refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_albums(page(), per_page()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    albums.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch albums: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Albums | {SITE_NAME}" }
        if let Some(data) = albums() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-5xl",
                    div {
                        class: "flex items-center justify-between gap-4 mb-6",
                        h1 { class: "text-lg sm:text-2xl", "Albums" }
                        if is_admin {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| show_create_modal.set(true),
                                "New Album"
                            }
                        }
                    }
                    if data.albums.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No albums yet"
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                            for album in data.albums.iter() {
                                Link {
                                    key: "{album.id}",
                                    to: Route::Album { id: album.id.clone() },
                                    class: "card bg-base-200 hover:bg-base-300 transition-colors",
                                    div {
                                        class: "card-body",
                                        h2 { class: "card-title", "{album.title}" }
                                        p {
                                            class: "text-sm opacity-70",
                                            {album.artist.clone().unwrap_or_default()}
                                            if let Some(year) = album.year {
                                                " · {year}"
                                            }
                                        }
                                        p { class: "text-xs opacity-50", "{album.track_count} tracks" }
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        page,
                        per_page,
                        data: PaginationData {
                            page: data.page,
                            per_page: data.per_page,
                            total: data.total,
                            total_pages: data.total_pages,
                        },
                    }
                }
            }
            CreateAlbumModal { show: show_create_modal, refetch_trigger }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn CreateAlbumModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut artist = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            name.set(String::new());
            title.set(String::new());
            artist.set(String::new());
            year.set(String::new());
            description.set(String::new());
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let create_future = use_resource(move || async move {
        if should_submit() {
            let payload = CreateAlbumDto {
                name: name().trim().to_string(),
                title: title(),
                artist: Some(artist()).filter(|a| !a.trim().is_empty()),
                year: year().trim().parse().ok(),
                description: Some(description()).filter(|d| !d.trim().is_empty()),
            };
            Some(create_album(payload).await)
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
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create album: {}", err);
                    error_message.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let is_submitting = should_submit();

    rsx! {
        Modal {
            show,
            title: "New Album".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if name().trim().is_empty() {
                        error_message.set(Some("Folder name is required".to_string()));
                        return;
                    }
                    if !year().trim().is_empty() && year().trim().parse::<i32>().is_err() {
                        error_message.set(Some("Year must be a number".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                label { class: "label", span { class: "label-text", "Folder name" } }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name of the storage folder",
                    value: "{name}",
                    disabled: is_submitting,
                    oninput: move |evt| name.set(evt.value()),
                }
                label { class: "label", span { class: "label-text", "Title (defaults to folder name)" } }
                input {
                    class: "input input-bordered w-full",
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
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Description (markdown)",
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
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Creating..."
                        } else {
                            "Create"
                        }
                    }
                }
            }
        }
    }
}
