//! View model types: `App` and the transport `Command`s it issues.
//!
//! `App` never changes player state itself. It keeps the most recent snapshot
//! it was handed, a cursor into the track list and the notice shown after a
//! command.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::library::TrackId;
use crate::player::{PlayerError, PlayerState, Snapshot};

/// A transport command issued by the UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Select(TrackId),
    Play,
    Pause,
    Stop,
}

impl Command {
    /// Feedback text for this command, judged against the state it was issued in.
    pub fn notice(&self, before: &PlayerState) -> String {
        match self {
            Command::Select(id) => match before.track(*id) {
                Some(t) => format!("Selected: {}", t.title),
                None => format!("Unknown track {}", id),
            },
            Command::Play => match before.selected_track() {
                Some(t) => format!("Playing: {}", t.title),
                None => "Select a song first".to_string(),
            },
            Command::Pause => "Paused".to_string(),
            Command::Stop => "Stopped".to_string(),
        }
    }
}

/// Notice text for a rejected strict command.
pub fn error_notice(err: &PlayerError) -> String {
    match err {
        PlayerError::NoSelection => "Select a song first".to_string(),
        other => format!("Error: {}", other),
    }
}

/// Enabled state of the three transport buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transport {
    pub play: bool,
    pub pause: bool,
    pub stop: bool,
}

impl Transport {
    pub fn for_state(state: &PlayerState) -> Self {
        Self {
            play: !state.is_playing(),
            pause: state.is_playing(),
            stop: state.selected().is_some(),
        }
    }
}

/// The main view model.
pub struct App {
    pub snapshot: Snapshot,
    pub cursor: usize,
    pub notice: Option<String>,
    notice_at: Option<Instant>,
}

impl App {
    /// Create a new `App` showing `snapshot`, cursor on the first row.
    pub fn new(snapshot: Snapshot) -> Self {
        let mut app = Self {
            snapshot,
            cursor: 0,
            notice: None,
            notice_at: None,
        };
        app.follow_selection();
        app
    }

    /// Replace the shown snapshot, keeping the cursor on a valid row.
    pub fn apply(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.clamp_cursor();
    }

    /// Drain pending snapshots from `rx`, keeping only the latest.
    ///
    /// Returns true when at least one snapshot arrived.
    pub fn sync(&mut self, rx: &Receiver<Snapshot>) -> bool {
        match rx.try_iter().last() {
            Some(latest) => {
                self.apply(latest);
                true
            }
            None => false,
        }
    }

    /// Return true if the library contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.snapshot.library().is_empty()
    }

    /// Id of the track under the cursor.
    pub fn cursor_track(&self) -> Option<TrackId> {
        self.snapshot.library().get(self.cursor).map(|t| t.id)
    }

    pub fn transport(&self) -> Transport {
        Transport::for_state(&self.snapshot)
    }

    /// Move the cursor to the next row. Wraps around to the first row.
    pub fn next(&mut self) {
        let len = self.snapshot.library().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor to the previous row. Wraps around to the last row.
    pub fn prev(&mut self) {
        let len = self.snapshot.library().len();
        if len > 0 {
            self.cursor = if self.cursor == 0 {
                len - 1
            } else {
                self.cursor - 1
            };
        }
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self) {
        self.cursor = self.snapshot.library().len().saturating_sub(1);
    }

    /// Put the cursor on the selected track, if any.
    pub fn follow_selection(&mut self) {
        if let Some(pos) = self
            .snapshot
            .selected()
            .and_then(|id| self.snapshot.position(id))
        {
            self.cursor = pos;
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.notice_at = Some(Instant::now());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_at = None;
    }

    /// Clear the notice once it has been shown for `ttl`.
    pub fn expire_notice(&mut self, now: Instant, ttl: Duration) {
        if let Some(at) = self.notice_at
            && now.saturating_duration_since(at) >= ttl
        {
            self.clear_notice();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.snapshot.library().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
