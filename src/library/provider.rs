use super::model::Track;

/// Supplies the ordered track list the player is initialized with.
///
/// `list` is called once, when the player is built. The returned order is the
/// display order.
pub trait LibraryProvider {
    fn list(&self) -> Vec<Track>;
}

/// The built-in library of five sample songs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleLibrary;

const SAMPLES: [(u64, &str, &str, u64); 5] = [
    (1, "Sample Song 1", "Artist A", 215_000),
    (2, "Sample Song 2", "Artist B", 195_000),
    (3, "Sample Song 3", "Artist A", 245_000),
    (4, "Sample Song 4", "Artist C", 180_000),
    (5, "Sample Song 5", "Artist B", 220_000),
];

impl LibraryProvider for SampleLibrary {
    fn list(&self) -> Vec<Track> {
        SAMPLES
            .iter()
            .map(|&(id, title, artist, millis)| {
                let source = format!("/path/to/song{id}.mp3");
                Track::new(id, title, artist, millis, source)
            })
            .collect()
    }
}

/// A provider over a caller-supplied track list.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct StaticLibrary {
    tracks: Vec<Track>,
}

#[cfg(test)]
impl StaticLibrary {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

#[cfg(test)]
impl LibraryProvider for StaticLibrary {
    fn list(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}
