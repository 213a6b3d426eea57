//! Immutable player snapshots.
//!
//! Every transition builds a new `PlayerState`; the library slice is shared
//! between snapshots and never changes after initialization.

use std::sync::Arc;

use crate::library::{Track, TrackId};

/// The three reachable player states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected.
    Idle,
    SelectedPaused,
    SelectedPlaying,
}

/// One snapshot of the player.
///
/// Invariant: `is_playing` implies `selected` is `Some`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    library: Arc<[Track]>,
    selected: Option<TrackId>,
    is_playing: bool,
}

impl PlayerState {
    /// Initial snapshot: the given library, nothing selected, not playing.
    pub fn new(library: Vec<Track>) -> Self {
        Self {
            library: library.into(),
            selected: None,
            is_playing: false,
        }
    }

    pub fn library(&self) -> &[Track] {
        &self.library
    }

    pub fn selected(&self) -> Option<TrackId> {
        self.selected
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn phase(&self) -> Phase {
        match (self.selected, self.is_playing) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::SelectedPaused,
            (Some(_), true) => Phase::SelectedPlaying,
        }
    }

    /// Look up a track of the library by id.
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.library.iter().find(|t| t.id == id)
    }

    /// Position of a track in display order.
    pub fn position(&self, id: TrackId) -> Option<usize> {
        self.library.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.position(id).is_some()
    }

    /// The selected track, resolved against the library.
    pub fn selected_track(&self) -> Option<&Track> {
        self.selected.and_then(|id| self.track(id))
    }

    /// Select `id` and stop any playback. Membership is the caller's concern.
    pub fn selecting(&self, id: TrackId) -> Self {
        Self {
            library: Arc::clone(&self.library),
            selected: Some(id),
            is_playing: false,
        }
    }

    /// Start playing the selection; unchanged when nothing is selected.
    pub fn playing(&self) -> Self {
        Self {
            library: Arc::clone(&self.library),
            selected: self.selected,
            is_playing: self.selected.is_some(),
        }
    }

    pub fn paused(&self) -> Self {
        Self {
            library: Arc::clone(&self.library),
            selected: self.selected,
            is_playing: false,
        }
    }

    pub fn stopped(&self) -> Self {
        Self {
            library: Arc::clone(&self.library),
            selected: None,
            is_playing: false,
        }
    }
}
