use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, Markdown},
        store::user::UserState,
    },
    model::comment::CommentDto,
};

#[cfg(feature = "web")]
use crate::client::api::comment::{create_comment, delete_comment, get_comments, update_comment};

/// Maximum comment length accepted by the server.
const MAX_COMMENT_LENGTH: usize = 2000;

#[component]
pub fn Comments(album_id: String) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let current_user = user_store.read().user.clone();

    let mut comments = use_signal(Vec::<CommentDto>::new);
    let mut target_album = use_signal(String::new);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut draft = use_signal(String::new);
    let mut should_post = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let mut editing = use_signal(|| None::<(String, String)>);
    let mut should_save_edit = use_signal(|| false);

    let mut comment_to_delete = use_signal(|| None::<String>);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    use_effect(use_reactive!(|(album_id,)| target_album.set(album_id)));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let album_id = target_album();
        if album_id.is_empty() {
            return None;
        }
        Some(get_comments(album_id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => comments.set(list.clone()),
                Err(err) => tracing::error!("Failed to fetch comments: {}", err),
            }
        }
    });

    #[cfg(feature = "web")]
    let post_future = use_resource(move || async move {
        if should_post() {
            Some(create_comment(target_album(), draft()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = post_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    draft.set(String::new());
                    error_message.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error_message.set(Some(err.message.clone())),
            }
            should_post.set(false);
        }
    });

    #[cfg(feature = "web")]
    let edit_future = use_resource(move || async move {
        if should_save_edit() {
            match editing.peek().clone() {
                Some((id, body)) => Some(update_comment(id, body).await),
                None => None,
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = edit_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    editing.set(None);
                    error_message.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error_message.set(Some(err.message.clone())),
            }
            should_save_edit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match comment_to_delete.peek().clone() {
                Some(id) => Some(delete_comment(id).await),
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
                    show_delete_modal.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => tracing::error!("Failed to delete comment: {}", err),
            }
            is_deleting.set(false);
        }
    });

    let draft_length = draft.read().chars().count();
    let is_posting = should_post();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-4",
                h2 { class: "text-lg font-semibold", "Comments" }
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if draft().trim().is_empty() {
                            return;
                        }
                        should_post.set(true);
                    },
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Say something about this album (markdown)",
                        value: "{draft}",
                        disabled: is_posting,
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    div {
                        class: "flex items-center justify-between",
                        span {
                            class: if draft_length > MAX_COMMENT_LENGTH { "text-xs text-error" } else { "text-xs opacity-50" },
                            "{draft_length}/{MAX_COMMENT_LENGTH}"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-sm",
                            disabled: is_posting || draft_length == 0 || draft_length > MAX_COMMENT_LENGTH,
                            "Post"
                        }
                    }
                }
                if let Some(err) = error_message() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }
                if comments.read().is_empty() {
                    div { class: "text-center py-4 opacity-50", "No comments yet" }
                }
                for comment in comments() {
                    {
                        let is_author = current_user.as_ref().is_some_and(|u| u.id == comment.author_id);
                        let can_delete = is_author || current_user.as_ref().is_some_and(|u| u.admin);
                        let is_editing = editing().is_some_and(|(id, _)| id == comment.id);
                        let edit_id = comment.id.clone();
                        let edit_body = comment.body.clone();
                        let delete_id = comment.id.clone();
                        let edited = comment.updated_at != comment.created_at;
                        rsx! {
                            div {
                                key: "{comment.id}",
                                class: "border-t border-base-300 pt-3",
                                div {
                                    class: "flex items-center justify-between gap-2",
                                    div {
                                        class: "text-sm",
                                        span { class: "font-semibold", "{comment.author_name}" }
                                        span {
                                            class: "opacity-50 ml-2",
                                            {comment.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                            if edited { " (edited)" }
                                        }
                                    }
                                    div {
                                        class: "flex gap-1",
                                        if is_author && !is_editing {
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                onclick: move |_| editing.set(Some((edit_id.clone(), edit_body.clone()))),
                                                "Edit"
                                            }
                                        }
                                        if can_delete {
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                onclick: move |_| {
                                                    comment_to_delete.set(Some(delete_id.clone()));
                                                    show_delete_modal.set(true);
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                                if is_editing {
                                    form {
                                        class: "flex flex-col gap-2 mt-2",
                                        onsubmit: move |evt| {
                                            evt.prevent_default();
                                            should_save_edit.set(true);
                                        },
                                        textarea {
                                            class: "textarea textarea-bordered w-full",
                                            value: editing().map(|(_, body)| body).unwrap_or_default(),
                                            oninput: move |evt| {
                                                if let Some((_, body)) = editing.write().as_mut() {
                                                    *body = evt.value();
                                                }
                                            },
                                        }
                                        div {
                                            class: "flex gap-2 justify-end",
                                            button {
                                                r#type: "button",
                                                class: "btn btn-sm",
                                                onclick: move |_| editing.set(None),
                                                "Cancel"
                                            }
                                            button {
                                                r#type: "submit",
                                                class: "btn btn-sm btn-primary",
                                                disabled: should_save_edit(),
                                                "Save"
                                            }
                                        }
                                    }
                                } else {
                                    Markdown { text: comment.body.clone(), class: "mt-1" }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Comment".to_string(),
            message: rsx!(p { class: "py-4", "Delete this comment?" }),
            is_processing: is_deleting(),
            on_confirm: move |_| {
                is_deleting.set(true);
            },
        }
    }
}
