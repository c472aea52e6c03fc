use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCompactDisc, FaImages, FaListUl},
    Icon,
};

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[component]
pub fn Header() -> Element {
    let user_store = use_context::<Store<UserState>>();

    let user_logged_in = user_store.read().user.is_some();
    let user_is_admin = user_store.read().user.as_ref().is_some_and(|u| u.admin);
    let display_name = user_store
        .read()
        .user
        .as_ref()
        .map(|u| u.display_name.clone());
    let fetch_completed = user_store.read().fetched;

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaCompactDisc
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
            if fetch_completed && user_logged_in {
                nav {
                    class: "hidden sm:flex items-center gap-2",
                    Link {
                        to: Route::Playlists {},
                        class: "btn btn-ghost btn-sm flex gap-2",
                        Icon { width: 16, height: 16, icon: FaListUl }
                        "Playlists"
                    }
                    Link {
                        to: Route::Gallery {},
                        class: "btn btn-ghost btn-sm flex gap-2",
                        Icon { width: 16, height: 16, icon: FaImages }
                        "Gallery"
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                if let Some(name) = display_name {
                    span {
                        class: "hidden md:inline opacity-70 mr-2",
                        "{name}"
                    }
                }
                if user_is_admin {
                    Link {
                        to: Route::Admin {},
                        class: "btn btn-outline",
                        p {
                            "Admin"
                        }
                    }
                }
                a {
                    href: "/api/auth/logout",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Logout"
                        }
                    }
                }
            } else if fetch_completed {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    p {
                        "Login"
                    }
                }
            }
        }
    })
}
