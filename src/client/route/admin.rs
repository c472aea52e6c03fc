use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, Modal, Page, Pagination, PaginationData,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        store::user::UserState,
    },
    model::{
        sync::SyncReportDto,
        user::{PaginatedUsersDto, UserDto},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::user::{create_user, delete_user, get_all_users, set_admin, sync_storage},
    model::user::CreateUserDto,
};

#[component]
pub fn Admin() -> Element {
    let mut users = use_signal(|| None::<PaginatedUsersDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 25u64);
    let refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_all_users(page(), per_page()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    users.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch users: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        if let Some(data) = users() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-5xl flex flex-col gap-6",
                    h1 { class: "text-lg sm:text-2xl", "Admin Panel" }
                    StorageSync {}
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            div {
                                class: "flex items-center justify-between gap-4",
                                h2 { class: "text-lg font-semibold", "Members" }
                                button {
                                    class: "btn btn-primary btn-sm",
                                    onclick: move |_| show_create_modal.set(true),
                                    "Add Member"
                                }
                            }
                            UsersTable { users: data.users.clone(), refetch_trigger }
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
                }
            }
            CreateUserModal { show: show_create_modal, refetch_trigger }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

/// Runs a storage sync on demand and shows its report.
#[component]
fn StorageSync() -> Element {
    let mut report = use_signal(|| None::<SyncReportDto>);
    let mut should_sync = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let sync_future = use_resource(move || async move {
        if should_sync() {
            Some(sync_storage().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = sync_future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    report.set(Some(data.clone()));
                    error_message.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to sync storage: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_sync.set(false);
        }
    });

    let is_syncing = should_sync();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-3",
                div {
                    class: "flex items-center justify-between gap-4",
                    div {
                        h2 { class: "text-lg font-semibold", "Storage Sync" }
                        p {
                            class: "text-sm opacity-70",
                            "Imports new album folders from the bucket and removes albums whose folder is gone."
                        }
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        disabled: is_syncing,
                        onclick: move |_| should_sync.set(true),
                        if is_syncing {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Syncing..."
                        } else {
                            "Sync Now"
                        }
                    }
                }
                if let Some(err) = error_message() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }
                if let Some(data) = report() {
                    div {
                        class: "stats stats-vertical sm:stats-horizontal bg-base-100",
                        div {
                            class: "stat",
                            div { class: "stat-title", "Albums added" }
                            div { class: "stat-value text-lg", "{data.albums_added}" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Albums removed" }
                            div { class: "stat-value text-lg", "{data.albums_removed}" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Tracks added" }
                            div { class: "stat-value text-lg", "{data.tracks_added}" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Tracks removed" }
                            div { class: "stat-value text-lg", "{data.tracks_removed}" }
                        }
                    }
                    for failure in data.failures.iter() {
                        div {
                            key: "{failure.folder}",
                            class: "alert alert-warning text-sm",
                            span { class: "font-mono", "{failure.folder}" }
                            span { "{failure.error}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UsersTable(users: Vec<UserDto>, mut refetch_trigger: Signal<u32>) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let current_user_id = user_store.read().user.as_ref().map(|u| u.id.clone());

    let mut admin_change = use_signal(|| None::<(String, bool)>);
    let mut user_to_delete = use_signal(|| None::<UserDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let admin_future = use_resource(move || async move {
        let (user_id, admin) = admin_change()?;
        Some(set_admin(user_id, admin).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = admin_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    action_error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => action_error.set(Some(err.message.clone())),
            }
            admin_change.set(None);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let user_id = user_to_delete.peek().as_ref()?.id.clone();
        Some(delete_user(user_id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    action_error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => action_error.set(Some(err.message.clone())),
            }
            show_delete_modal.set(false);
            is_deleting.set(false);
        }
    });

    let is_busy = admin_change().is_some() || is_deleting();

    rsx! {
        if let Some(err) = action_error() {
            div {
                class: "alert alert-error",
                span { "{err}" }
            }
        }
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Name" }
                        th { "Username" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for user in users {
                        {
                            let is_current_user = current_user_id.as_deref() == Some(user.id.as_str());
                            let toggle_id = user.id.clone();
                            let toggle_to = !user.admin;
                            let delete_target = user.clone();
                            rsx! {
                                tr {
                                    key: "{user.id}",
                                    td {
                                        div {
                                            class: "flex items-center gap-2",
                                            span { "{user.display_name}" }
                                            if user.admin {
                                                span { class: "badge badge-sm badge-success", "Admin" }
                                            }
                                            if is_current_user {
                                                span { class: "badge badge-sm badge-primary", "You" }
                                            }
                                        }
                                    }
                                    td { class: "font-mono text-sm", "{user.username}" }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            button {
                                                class: "btn btn-sm btn-outline",
                                                disabled: is_current_user || is_busy,
                                                onclick: move |_| admin_change.set(Some((toggle_id.clone(), toggle_to))),
                                                if toggle_to { "Make Admin" } else { "Revoke Admin" }
                                            }
                                            button {
                                                class: "btn btn-sm btn-error",
                                                disabled: is_current_user || is_busy,
                                                onclick: move |_| {
                                                    user_to_delete.set(Some(delete_target.clone()));
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

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Member".to_string(),
            message: rsx!(
                if let Some(user) = user_to_delete() {
                    p {
                        class: "py-4",
                        "Delete "
                        span { class: "font-bold", "\"{user.display_name}\"" }
                        "? Their playlists, comments and gallery uploads are removed too."
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

#[component]
fn CreateUserModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut admin = use_signal(|| false);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(move || {
        if show() {
            username.set(String::new());
            display_name.set(String::new());
            password.set(String::new());
            admin.set(false);
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let create_future = use_resource(move || async move {
        if should_submit() {
            let payload = CreateUserDto {
                username: username(),
                display_name: display_name(),
                password: password(),
                admin: admin(),
            };
            Some(create_user(payload).await)
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
                    tracing::error!("Failed to create user: {}", err);
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
            title: "Add Member".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if password().chars().count() < 8 {
                        error_message.set(Some("Password must be at least 8 characters".to_string()));
                        return;
                    }
                    error_message.set(None);
                    should_submit.set(true);
                },
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Username",
                    value: "{username}",
                    disabled: is_submitting,
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Display name (optional)",
                    value: "{display_name}",
                    disabled: is_submitting,
                    oninput: move |evt| display_name.set(evt.value()),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "Initial password",
                    autocomplete: "new-password",
                    value: "{password}",
                    disabled: is_submitting,
                    oninput: move |evt| password.set(evt.value()),
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: admin(),
                        disabled: is_submitting,
                        onchange: move |evt| admin.set(evt.checked()),
                    }
                    span { class: "label-text", "Admin" }
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
                        "Add"
                    }
                }
            }
        }
    }
}
