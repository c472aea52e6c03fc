pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog shell used by every form in the app.
///
/// While `prevent_close` is set (an upload or save is in flight) neither Escape, the
/// backdrop nor the close button dismiss the dialog. `wide` widens the box for forms
/// that show previews.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    #[props(default)] prevent_close: bool,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let mut close = move || {
        if !prevent_close {
            show.set(false);
        }
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let width = if wide { "max-w-3xl" } else { "max-w-lg" };

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 {width}",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg truncate", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        disabled: prevent_close,
                        onclick: move |_| close(),
                        "✕"
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
