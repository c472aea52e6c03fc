use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCompactDisc, Icon};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    router::Route,
    store::user::UserState,
};

#[cfg(feature = "web")]
use crate::client::api::auth::login;

#[component]
pub fn Login() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let user_logged_in = user_store.read().user.is_some();
    let fetch_completed = user_store.read().fetched;

    // Logged in users have nothing to do here
    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && user_logged_in {
            nav.push(Route::Home {});
        }
    }));

    #[cfg(feature = "web")]
    let login_future = use_resource(move || async move {
        if should_submit() {
            Some(login(username(), password()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = login_future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    user_store.set(UserState {
                        user: Some(user.clone()),
                        fetched: true,
                    });
                    should_submit.set(false);
                }
                Err(err) => {
                    error_message.set(Some(err.message.clone()));
                    password.set(String::new());
                    should_submit.set(false);
                }
            }
        }
    });

    let is_submitting = should_submit();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !fetch_completed || user_logged_in {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                div {
                    class: "flex flex-col items-center gap-4",
                    Icon {
                        width: 96,
                        height: 96,
                        icon: FaCompactDisc
                    }
                    p {
                        class: "text-2xl",
                        {SITE_NAME}
                    }
                }
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if username().trim().is_empty() || password().is_empty() {
                            error_message.set(Some("Enter your username and password".to_string()));
                            return;
                        }
                        error_message.set(None);
                        should_submit.set(true);
                    },
                    div {
                        class: "card-body flex flex-col gap-3",
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Username",
                            autocomplete: "username",
                            value: "{username}",
                            disabled: is_submitting,
                            oninput: move |evt| username.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Password",
                            autocomplete: "current-password",
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
                                "Logging in..."
                            } else {
                                "Login"
                            }
                        }
                        Link {
                            to: Route::Setup {},
                            class: "link text-sm opacity-70 text-center",
                            "First time here? Set up the admin account"
                        }
                    }
                }
            }
        }
    }
}
