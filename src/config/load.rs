use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `PEONY__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PEONY")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Load and validate settings, falling back to defaults on any failure.
    ///
    /// Config is optional, so a bad file never stops startup. The second value
    /// carries the reason when the defaults were used instead.
    pub fn load_or_default() -> (Self, Option<String>) {
        match Self::load() {
            Ok(s) => match s.validate() {
                Ok(()) => (s, None),
                Err(msg) => (Self::default(), Some(format!("invalid config: {msg}"))),
            },
            Err(e) => (Self::default(), Some(format!("failed to load config: {e}"))),
        }
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.track_fields.is_empty() {
            return Err("ui.track_fields must name at least one field".to_string());
        }
        if self.log.filter.trim().is_empty() {
            return Err("log.filter must not be empty".to_string());
        }
        Ok(())
    }

    /// Render these settings as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The configured log file, or the XDG default.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(default_log_path)
    }
}

/// Resolve the config path from `PEONY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PEONY_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/peony/config.toml`
/// or `~/.config/peony/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("peony").join("config.toml"))
}

/// Compute the default log path under `$XDG_STATE_HOME/peony/peony.log`
/// or `~/.local/state/peony/peony.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("peony").join("peony.log"))
}
