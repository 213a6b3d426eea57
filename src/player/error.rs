use thiserror::Error;

use crate::library::TrackId;

/// Failures reported by the strict command variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("no track with id {0} in the library")]
    UnknownTrack(TrackId),
    #[error("select a song first")]
    NoSelection,
}
