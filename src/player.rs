//! Player module: the state snapshot, the state machine that transitions it
//! and the observer registry that publishes each new snapshot.
//!
//! The `Player` is owned by the runtime session; the UI reaches it by
//! `&mut` reference and learns about changes only through subscriptions.

mod error;
mod machine;
mod observer;
mod state;

pub use error::*;
pub use machine::*;
pub use observer::*;
pub use state::*;
