use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            media_url,
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, FileInput, Modal, Page, Pagination, PaginationData,
        },
        constant::SITE_NAME,
        model::{error::ApiError, upload::SelectedFile},
        store::user::UserState,
    },
    model::gallery::{GalleryItemDto, PaginatedGalleryDto},
};

#[cfg(feature = "web")]
use crate::client::api::gallery::{
    delete_gallery_item, get_gallery, update_gallery_item, upload_gallery_item,
};

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

/// Shared photos and videos, newest first.
#[component]
pub fn Gallery() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let current_user = user_store.read().user.clone();

    let mut gallery = use_signal(|| None::<PaginatedGalleryDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 25u64);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_upload_modal = use_signal(|| false);
    let mut selected_item = use_signal(|| None::<GalleryItemDto>);
    let mut show_caption_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_gallery(page(), per_page()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    gallery.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch gallery: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let item_id = selected_item.peek().as_ref()?.id.clone();
        Some(delete_gallery_item(item_id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    show_delete_modal.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => tracing::error!("Failed to delete gallery item: {}", err),
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        Title { "Gallery | {SITE_NAME}" }
        if let Some(data) = gallery() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    div {
                        class: "flex items-center justify-between gap-4 mb-6",
                        h1 { class: "text-lg sm:text-2xl", "Gallery" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_upload_modal.set(true),
                            "Upload"
                        }
                    }
                    if data.items.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "Nothing uploaded yet"
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                            for item in data.items.iter().cloned() {
                                {
                                    let can_modify = current_user
                                        .as_ref()
                                        .is_some_and(|u| u.admin || u.id == item.uploader_id);
                                    let src = media_url(&item.file_key);
                                    let caption_item = item.clone();
                                    let delete_item = item.clone();
                                    rsx! {
                                        div {
                                            key: "{item.id}",
                                            class: "card bg-base-200 overflow-hidden",
                                            figure {
                                                if item.kind == "video" {
                                                    video {
                                                        class: "w-full max-h-72",
                                                        controls: true,
                                                        preload: "metadata",
                                                        src: "{src}",
                                                    }
                                                } else {
                                                    a {
                                                        href: "{src}",
                                                        target: "_blank",
                                                        img {
                                                            class: "w-full max-h-72 object-cover",
                                                            loading: "lazy",
                                                            src: "{src}",
                                                            alt: item.caption.clone().unwrap_or_default(),
                                                        }
                                                    }
                                                }
                                            }
                                            div {
                                                class: "card-body p-3 gap-1",
                                                if let Some(caption) = item.caption.clone() {
                                                    p { class: "text-sm", "{caption}" }
                                                }
                                                div {
                                                    class: "flex items-center justify-between",
                                                    span {
                                                        class: "text-xs opacity-50",
                                                        {item.created_at.format("%Y-%m-%d").to_string()}
                                                    }
                                                    if can_modify {
                                                        div {
                                                            class: "flex gap-1",
                                                            button {
                                                                class: "btn btn-ghost btn-xs",
                                                                onclick: move |_| {
                                                                    selected_item.set(Some(caption_item.clone()));
                                                                    show_caption_modal.set(true);
                                                                },
                                                                "Caption"
                                                            }
                                                            button {
                                                                class: "btn btn-ghost btn-xs text-error",
                                                                onclick: move |_| {
                                                                    selected_item.set(Some(delete_item.clone()));
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
            UploadModal { show: show_upload_modal, refetch_trigger }
            CaptionModal { show: show_caption_modal, item: selected_item(), refetch_trigger }
            ConfirmationModal {
                show: show_delete_modal,
                title: "Delete Upload".to_string(),
                message: rsx!(p { class: "py-4", "Delete this upload? The file is removed from storage." }),
                is_processing: is_deleting(),
                on_confirm: move |_| {
                    is_deleting.set(true);
                },
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn UploadModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut selected = use_signal(|| None::<SelectedFile>);
    let mut caption = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(move || {
        if show() {
            selected.set(None);
            caption.set(String::new());
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let upload_future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }
        let file = selected.peek().clone()?;
        Some(upload_gallery_item(file, optional(caption())).await)
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
                    tracing::error!("Failed to upload gallery item: {}", err);
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
            title: "Upload Photo or Video".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if selected.read().is_none() {
                        error_message.set(Some("Choose a photo or video".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                FileInput { selected, error_message, accept: "image/*,video/*", disabled: is_submitting }
                p { class: "text-xs opacity-60", "Up to 200 MiB." }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Caption (optional)",
                    value: "{caption}",
                    disabled: is_submitting,
                    oninput: move |evt| caption.set(evt.value()),
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
                            "Uploading..."
                        } else {
                            "Upload"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CaptionModal(
    mut show: Signal<bool>,
    item: Option<GalleryItemDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut item_id = use_signal(String::new);
    let mut caption = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(use_reactive!(|(item,)| {
        if show() {
            if let Some(item) = item {
                item_id.set(item.id);
                caption.set(item.caption.unwrap_or_default());
            }
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let update_future = use_resource(move || async move {
        if should_submit() {
            Some(update_gallery_item(item_id(), optional(caption())).await)
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
            title: "Edit Caption".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    should_submit.set(true);
                },
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Leave empty to remove the caption",
                    value: "{caption}",
                    disabled: is_submitting,
                    oninput: move |evt| caption.set(evt.value()),
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
