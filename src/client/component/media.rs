use dioxus::prelude::*;

/// URL of the media proxy for a storage key, with every path segment percent-encoded.
pub fn media_url(key: &str) -> String {
    let encoded: Vec<String> = key
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();

    format!("/api/media/{}", encoded.join("/"))
}

/// Formats a duration in seconds as `m:ss`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Audio player for the track that is currently selected.
#[component]
pub fn AudioPlayer(title: String, subtitle: Option<String>, file_key: String) -> Element {
    let src = media_url(&file_key);

    rsx!(
        div {
            class: "card bg-base-200 sticky bottom-4 z-10",
            div {
                class: "card-body py-3 flex flex-col sm:flex-row sm:items-center gap-3",
                div {
                    class: "flex-1 min-w-0",
                    p { class: "font-semibold truncate", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "text-xs opacity-60 truncate", "{subtitle}" }
                    }
                }
                audio {
                    key: "{src}",
                    class: "w-full sm:w-96",
                    controls: true,
                    autoplay: true,
                    preload: "metadata",
                    src: "{src}",
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_each_segment() {
        assert_eq!(
            media_url("Live 2024/01 - Intro #1.mp3"),
            "/api/media/Live%202024/01%20-%20Intro%20%231.mp3"
        );
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(61.4), "1:01");
        assert_eq!(format_duration(600.0), "10:00");
    }
}
