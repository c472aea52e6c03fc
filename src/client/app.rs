use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let user_store = use_store(UserState::default);
    use_context_provider(|| user_store);

    // Fetch the session user once; protected layouts wait for `fetched`
    #[cfg(feature = "web")]
    {
        let mut user_store = user_store;
        use_future(move || async move {
            let user = match get_user().await {
                Ok(user) => user,
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch user: {}", err);
                    None
                }
            };
            user_store.set(UserState {
                user,
                fetched: true,
            });
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Private music archive for the band"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
