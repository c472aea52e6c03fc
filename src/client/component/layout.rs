use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

/// Shell shared by every route: fixed header, routed page, footer.
#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen bg-base-100",
        Header {  }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "footer footer-center p-4 text-sm opacity-60",
            p { "{SITE_NAME} · members only" }
        }
    })
}
