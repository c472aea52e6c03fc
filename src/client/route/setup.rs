use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::{client::api::auth::setup, model::user::SetupDto};

/// First-admin setup using the one-time code printed in the server log.
#[component]
pub fn Setup() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let nav = navigator();

    let mut code = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let setup_future = use_resource(move || async move {
        if should_submit() {
            let payload = SetupDto {
                code: code().trim().to_string(),
                username: username(),
                display_name: display_name(),
                password: password(),
            };
            Some(setup(payload).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = setup_future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    user_store.set(UserState {
                        user: Some(user.clone()),
                        fetched: true,
                    });
                    should_submit.set(false);
                    nav.push(Route::Admin {});
                }
                Err(err) => {
                    error_message.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let is_submitting = should_submit();

    rsx! {
        Title { "Setup | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center w-full h-full",
            form {
                class: "card bg-base-200 w-full max-w-md",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    error_message.set(None);
                    should_submit.set(true);
                },
                div {
                    class: "card-body flex flex-col gap-3",
                    h1 { class: "text-xl font-semibold", "Create the admin account" }
                    p {
                        class: "text-sm opacity-70",
                        "Enter the setup code from the server log. It is valid for 10 minutes."
                    }
                    input {
                        class: "input input-bordered w-full font-mono",
                        placeholder: "Setup code",
                        value: "{code}",
                        disabled: is_submitting,
                        oninput: move |evt| code.set(evt.value()),
                    }
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
                        placeholder: "Password (at least 8 characters)",
                        autocomplete: "new-password",
                        value: "{password}",
                        disabled: is_submitting,
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(err) = error_message() {
                        div {
                            class: "alert alert-error",
                            span { "{err}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Creating..."
                        } else {
                            "Create admin"
                        }
                    }
                }
            }
        }
    }
}
