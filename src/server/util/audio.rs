//! Helpers for recognizing audio objects and deriving fallback titles from their names.

/// Extensions treated as album tracks, compared case-insensitively.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "ogg", "opus", "m4a", "aac", "aiff"];

/// Returns the final `/`-separated segment of an object key.
pub fn file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Returns the lowercase extension of a file name, if any.
pub fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_audio_file(file_name: &str) -> bool {
    extension(file_name).is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
}

/// Derives a display title from a file name.
///
/// Strips the extension and a leading track number such as `01 `, `01-`, `1. ` or
/// `02_`. Falls back to the bare stem when stripping would leave nothing.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };

    let without_number = stem.trim_start_matches(|c: char| c.is_ascii_digit());
    let stripped = if without_number.len() != stem.len() {
        without_number.trim_start_matches(|c: char| matches!(c, ' ' | '-' | '_' | '.'))
    } else {
        stem
    };

    let title = stripped.trim();
    if title.is_empty() {
        stem.trim().to_string()
    } else {
        title.to_string()
    }
}
