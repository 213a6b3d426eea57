use crate::config::TrackField;

use super::model::Track;

/// Format a millisecond duration as `M:SS`.
///
/// Minutes wrap at 60, so lengths of an hour or more lose the hour part.
pub fn format_duration(millis: u64) -> String {
    let seconds = (millis / 1000) % 60;
    let minutes = (millis / 60_000) % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Build a display string for a track from the configured `fields` and separator.
///
/// Blank text fields are skipped; falls back to the title when nothing was produced.
pub fn display_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.trim().to_string());
                }
            }
            TrackField::Artist => {
                if !track.artist.trim().is_empty() {
                    parts.push(track.artist.trim().to_string());
                }
            }
            TrackField::Duration => parts.push(format_duration(track.duration_millis)),
            TrackField::Source => {
                if !track.source.trim().is_empty() {
                    parts.push(track.source.clone());
                }
            }
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}

/// "Now Playing" line shown in the transport bar.
pub fn now_playing_text(track: Option<&Track>) -> String {
    match track {
        Some(t) => format!("Now Playing: {} - {}", t.title, t.artist),
        None => "No song playing".to_string(),
    }
}
