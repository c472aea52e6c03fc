use dioxus::prelude::*;

use super::Modal;

/// Asks before a destructive action such as deleting an album, track or upload.
///
/// The confirm button defaults to a red "Delete" button that shows "Deleting..." while
/// `is_processing` is set.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: Element,
    #[props(default = "Delete".to_string())] confirm_text: String,
    #[props(default = "btn-error".to_string())] confirm_class: String,
    is_processing: bool,
    #[props(default = "Deleting...".to_string())] processing_text: String,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "{processing_text}"
                    } else {
                        "{confirm_text}"
                    }
                }
            }
        }
    )
}
