//! Runtime configuration: defaults, then an optional YAML file, then environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::live::quotes::DEFAULT_QUOTE_URL;
use crate::adapters::live::search::DEFAULT_SEARCH_URL;

/// Directory used when nothing else names one.
pub const DEFAULT_DATA_DIR: &str = ".studymate";
/// File name of the optional config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the key-value store keeps its files.
    pub data_dir: PathBuf,
    /// Random-quote endpoint.
    pub quote_url: String,
    /// Related-topics search endpoint.
    pub search_url: String,
    /// Milliseconds between timer ticks. One second in normal use.
    pub tick_ms: u64,
    /// Completion sound. Defaults to `<data_dir>/sounds/notification.wav`.
    pub sound_file: Option<PathBuf>,
    /// Per-request timeout for the HTTP services, in seconds.
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            tick_ms: 1_000,
            sound_file: None,
            http_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Loads configuration for this process.
    ///
    /// Reads `.env` (if any), locates the data directory (`data_dir_flag`,
    /// then `STUDYMATE_DATA_DIR`, then the default), reads the YAML config
    /// file (`STUDYMATE_CONFIG` or `<data_dir>/config.yaml`) and finally
    /// applies `STUDYMATE_*` environment overrides. A malformed config file
    /// is logged and ignored.
    #[must_use]
    pub fn load(data_dir_flag: Option<&Path>) -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("ignoring unreadable .env file: {e}");
            }
        }
        let env = |name: &str| std::env::var(name).ok();

        let data_dir = data_dir_flag
            .map(Path::to_path_buf)
            .or_else(|| env("STUDYMATE_DATA_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let config_path = env("STUDYMATE_CONFIG")
            .map_or_else(|| data_dir.join(CONFIG_FILE_NAME), PathBuf::from);

        let file = match std::fs::read_to_string(&config_path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %config_path.display(), "cannot read config file: {e}");
                None
            }
        };

        let mut config = Self::from_sources(file.as_deref(), env);
        if let Some(dir) = data_dir_flag {
            config.data_dir = dir.to_path_buf();
        }
        config
    }

    /// Builds a config from YAML text and an environment lookup.
    ///
    /// Split from [`Config::load`] so the layering can be tested without
    /// touching the process environment.
    pub fn from_sources(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match file.map(serde_yaml::from_str::<Self>) {
            Some(Ok(parsed)) => parsed,
            Some(Err(e)) => {
                tracing::warn!("ignoring malformed config file: {e}");
                Self::default()
            }
            None => Self::default(),
        };

        if let Some(dir) = env("STUDYMATE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = env("STUDYMATE_QUOTE_URL") {
            config.quote_url = url;
        }
        if let Some(url) = env("STUDYMATE_SEARCH_URL") {
            config.search_url = url;
        }
        if let Some(sound) = env("STUDYMATE_SOUND") {
            config.sound_file = Some(PathBuf::from(sound));
        }
        if let Some(raw) = env("STUDYMATE_TICK_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.tick_ms = ms,
                _ => tracing::warn!(value = %raw, "STUDYMATE_TICK_MS must be a positive integer"),
            }
        }
        if config.tick_ms == 0 {
            config.tick_ms = Self::default().tick_ms;
        }
        config
    }

    /// Interval between timer ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Timeout applied to each HTTP request.
    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Sound played when an interval completes.
    #[must_use]
    pub fn sound_path(&self) -> PathBuf {
        self.sound_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("sounds").join("notification.wav"))
    }
}
