use std::sync::Arc;

use tracing::{debug, warn};

use crate::library::{LibraryProvider, TrackId};

use super::error::PlayerError;
use super::observer::{Observer, Observers, Snapshot, SubscriptionId};
use super::state::PlayerState;

/// The player state machine.
///
/// Holds the current snapshot and swaps it for a new one on every command.
/// Commands are total: invalid requests leave the state as it is, but the
/// (possibly unchanged) snapshot is still published.
pub struct Player {
    state: Snapshot,
    observers: Observers,
}

impl Player {
    /// Build a player from the provider's library, starting idle.
    pub fn new(provider: &dyn LibraryProvider) -> Self {
        let tracks = provider.list();
        debug!(tracks = tracks.len(), "player initialized");
        Self {
            state: Arc::new(PlayerState::new(tracks)),
            observers: Observers::default(),
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    /// Register an observer. It receives the current snapshot immediately.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer + 'static,
    {
        self.observers.subscribe(Box::new(observer), &self.state)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Select a track and stop playback.
    ///
    /// An id that is not part of the library is ignored.
    pub fn select(&mut self, id: TrackId) {
        if self.state.contains(id) {
            let next = self.state.selecting(id);
            self.transition(next, "select");
        } else {
            warn!(%id, "ignoring selection of unknown track");
            self.republish("select");
        }
    }

    /// Start playing the selection; no-op when nothing is selected.
    pub fn play(&mut self) {
        let next = self.state.playing();
        self.transition(next, "play");
    }

    pub fn pause(&mut self) {
        let next = self.state.paused();
        self.transition(next, "pause");
    }

    /// Clear the selection and stop playback.
    pub fn stop(&mut self) {
        let next = self.state.stopped();
        self.transition(next, "stop");
    }

    /// Like `select`, but reports an unknown id instead of ignoring it.
    pub fn try_select(&mut self, id: TrackId) -> Result<(), PlayerError> {
        if !self.state.contains(id) {
            return Err(PlayerError::UnknownTrack(id));
        }
        self.select(id);
        Ok(())
    }

    /// Like `play`, but reports a missing selection instead of doing nothing.
    pub fn try_play(&mut self) -> Result<(), PlayerError> {
        if self.state.selected().is_none() {
            return Err(PlayerError::NoSelection);
        }
        self.play();
        Ok(())
    }

    fn transition(&mut self, next: PlayerState, command: &'static str) {
        if *self.state == next {
            self.republish(command);
            return;
        }
        self.state = Arc::new(next);
        debug!(
            command,
            phase = ?self.state.phase(),
            selected = ?self.state.selected(),
            "player transition"
        );
        self.observers.publish(&self.state);
    }

    fn republish(&mut self, command: &'static str) {
        debug!(command, phase = ?self.state.phase(), "player command left state unchanged");
        self.observers.publish(&self.state);
    }
}
