use std::sync::Arc;
use std::sync::mpsc::Sender;

use super::state::PlayerState;

/// A published player snapshot.
pub type Snapshot = Arc<PlayerState>;

/// Receives player snapshots: once on subscription, then after every command.
pub trait Observer {
    /// Deliver `state`. Returning `false` drops the observer from the registry.
    fn on_state(&mut self, state: &Snapshot) -> bool;
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot),
{
    fn on_state(&mut self, state: &Snapshot) -> bool {
        (self)(state);
        true
    }
}

/// Channel observers stay registered until the receiving side is gone.
impl Observer for Sender<Snapshot> {
    fn on_state(&mut self, state: &Snapshot) -> bool {
        self.send(Arc::clone(state)).is_ok()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered observers in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Observer>)>,
}

impl Observers {
    /// Register `observer` and replay `current` to it right away.
    pub fn subscribe(
        &mut self,
        mut observer: Box<dyn Observer>,
        current: &Snapshot,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if observer.on_state(current) {
            self.entries.push((id, observer));
        }
        id
    }

    /// Remove an observer. Returns false when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    /// Push `state` to every observer, dropping those that refuse it.
    pub fn publish(&mut self, state: &Snapshot) {
        self.entries
            .retain_mut(|(_, observer)| observer.on_state(state));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
