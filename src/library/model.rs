use std::fmt;

/// Stable identifier of a track within one library snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable record describing one playable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    /// Total playback length in milliseconds.
    pub duration_millis: u64,
    /// Opaque locator of the audio source (path or URI). Stored, never opened.
    pub source: String,
}

impl Track {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_millis: u64,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId(id),
            title: title.into(),
            artist: artist.into(),
            duration_millis,
            source: source.into(),
        }
    }
}
