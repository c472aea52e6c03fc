//! Track metadata extraction from audio file contents.
//!
//! Tags and stream properties are read with lofty. Extraction never fails: files lofty
//! cannot parse fall back to a title derived from the file name and a zero duration.

use dioxus_logger::tracing;
use lofty::error::LoftyError;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::Accessor;
use std::io::Cursor;

use crate::server::{
    model::track::TrackMetadata,
    util::audio::{extension, title_from_file_name},
};

/// Extracts track metadata from the bytes of an audio file.
///
/// The codec is taken from the file extension, the title from the primary (or first)
/// tag, and duration, bitrate, sample rate and channel count from the stream
/// properties. When lofty cannot read the file, or the tag has no title, the title is
/// derived from `file_name`.
///
/// # Arguments
/// - `data` - Complete contents of the audio file
/// - `file_name` - Name of the file, used for the codec and the fallback title
///
/// # Returns
/// - `TrackMetadata` - Extracted metadata, or the filename-derived fallback
pub fn extract(data: &[u8], file_name: &str) -> TrackMetadata {
    let tagged = match read_tagged(data) {
        Ok(tagged) => tagged,
        Err(e) => {
            tracing::warn!("Failed to read metadata from {}: {}", file_name, e);
            return fallback(file_name);
        }
    };

    let title = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .and_then(|tag| tag.title().map(|title| title.trim().to_string()))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| title_from_file_name(file_name));

    let properties = tagged.properties();

    TrackMetadata {
        title,
        duration_seconds: properties.duration().as_secs_f64(),
        codec: extension(file_name),
        bitrate_kbps: properties.audio_bitrate().map(|kbps| kbps as i32),
        sample_rate: properties.sample_rate().map(|rate| rate as i32),
        channels: properties.channels().map(i32::from),
    }
}

/// Metadata used when a file cannot be read: title from the file name, zero duration.
pub fn fallback(file_name: &str) -> TrackMetadata {
    TrackMetadata {
        title: title_from_file_name(file_name),
        duration_seconds: 0.0,
        codec: extension(file_name),
        bitrate_kbps: None,
        sample_rate: None,
        channels: None,
    }
}

fn read_tagged(data: &[u8]) -> Result<TaggedFile, LoftyError> {
    let tagged = Probe::new(Cursor::new(data)).guess_file_type()?.read()?;
    Ok(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the fallback for bytes that are not an audio file.
    ///
    /// Verifies that the title is derived from the file name with the track number
    /// stripped and that the duration is zero.
    ///
    /// Expected: fallback metadata with codec from the extension
    #[test]
    fn falls_back_for_unreadable_file() {
        let metadata = extract(b"definitely not audio", "03 - Night Drive.mp3");

        assert_eq!(metadata.title, "Night Drive");
        assert_eq!(metadata.duration_seconds, 0.0);
        assert_eq!(metadata.codec.as_deref(), Some("mp3"));
        assert!(metadata.bitrate_kbps.is_none());
        assert!(metadata.channels.is_none());
    }

    /// Tests the fallback for an empty upload.
    ///
    /// Expected: fallback metadata
    #[test]
    fn falls_back_for_empty_file() {
        let metadata = extract(&[], "Rehearsal.flac");

        assert_eq!(metadata.title, "Rehearsal");
        assert_eq!(metadata.codec.as_deref(), Some("flac"));
    }
}
