use dioxus::prelude::*;

use crate::client::model::{error::ApiError, upload::SelectedFile};

/// Reads the first file of a file input change event into memory.
///
/// # Returns
/// - `Ok(Some(file))` - A file was picked and read
/// - `Ok(None)` - The selection was cleared
/// - `Err(ApiError)` - The browser could not read the file
pub async fn read_first_file(evt: &Event<FormData>) -> Result<Option<SelectedFile>, ApiError> {
    let Some(file) = evt.files().into_iter().next() else {
        return Ok(None);
    };

    let data = file
        .read_bytes()
        .await
        .map_err(|e| ApiError::client(format!("Failed to read {}: {}", file.name(), e)))?;

    Ok(Some(SelectedFile {
        name: file.name(),
        content_type: file.content_type(),
        data: data.to_vec(),
    }))
}

/// File picker that keeps the picked file in `selected`.
#[component]
pub fn FileInput(
    mut selected: Signal<Option<SelectedFile>>,
    mut error_message: Signal<Option<String>>,
    accept: &'static str,
    disabled: bool,
) -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-1",
            input {
                r#type: "file",
                class: "file-input file-input-bordered w-full",
                accept,
                disabled,
                onchange: move |evt| async move {
                    match read_first_file(&evt).await {
                        Ok(file) => {
                            selected.set(file);
                            error_message.set(None);
                        }
                        Err(err) => {
                            selected.set(None);
                            error_message.set(Some(err.message));
                        }
                    }
                },
            }
            if let Some(file) = selected() {
                span { class: "text-xs opacity-60", "{file.name} ({file.size_mib()})" }
            }
        }
    )
}
