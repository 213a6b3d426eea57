use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/peony/config.toml` or `~/.config/peony/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PEONY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub player: PlayerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "peony" header box.
    pub header_text: String,

    /// Which track fields make up a row of the track list, and in what order.
    ///
    /// Example: ["title", "artist", "duration"]
    pub track_fields: Vec<TrackField>,

    /// Separator used to join `track_fields`.
    pub track_separator: String,

    /// Whether command feedback ("Selected: ...", "Paused", ...) is shown.
    pub show_notices: bool,

    /// How long a notice stays on screen (milliseconds).
    pub notice_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ peony ~ ".to_string(),
            track_fields: vec![TrackField::Title, TrackField::Artist, TrackField::Duration],
            track_separator: " • ".to_string(),
            show_notices: true,
            notice_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Report unknown tracks and play-without-selection instead of ignoring them.
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive. `PEONY_LOG` takes precedence.
    pub filter: String,
    /// Log file location. Defaults to the XDG state directory.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    Artist,
    /// Formatted as `M:SS`.
    #[serde(alias = "length")]
    Duration,
    #[serde(alias = "path", alias = "uri")]
    Source,
}
