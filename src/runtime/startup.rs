use std::sync::mpsc::{self, Receiver};

use tracing::info;

use crate::app::App;
use crate::library::LibraryProvider;
use crate::player::{Player, Snapshot, SubscriptionId};

/// One UI session: the player, the view model and the channel the view model
/// receives snapshots on.
pub struct Session {
    pub player: Player,
    pub app: App,
    pub snapshots: Receiver<Snapshot>,
    subscription: SubscriptionId,
}

impl Session {
    /// Load the library, build the player and subscribe the view model.
    pub fn start(provider: &dyn LibraryProvider) -> Self {
        let mut player = Player::new(provider);
        let (tx, snapshots) = mpsc::channel::<Snapshot>();
        let subscription = player.subscribe(tx);

        // The subscription replays the current snapshot right away.
        let mut app = App::new(player.state().clone());
        app.sync(&snapshots);

        info!(
            tracks = player.state().library().len(),
            observers = player.observer_count(),
            "session started"
        );
        Self {
            player,
            app,
            snapshots,
            subscription,
        }
    }

    /// Unsubscribe the view model.
    pub fn close(mut self) {
        self.player.unsubscribe(self.subscription);
        info!("session closed");
    }
}
