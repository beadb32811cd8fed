//! Audio cue port, played when a timer interval completes.

use thiserror::Error;

/// Why a cue could not be played.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The configured sound asset does not exist.
    #[error("sound file not found: {0}")]
    MissingAsset(String),
    /// The platform audio player could not be launched.
    #[error("failed to launch audio player {player}: {source}")]
    Player {
        /// Player binary that was attempted.
        player: String,
        /// Spawn error.
        #[source]
        source: std::io::Error,
    },
}

/// Plays a fixed completion cue.
///
/// Playback is best effort: callers log and drop any error.
pub trait Notifier: Send + Sync {
    /// Starts playing the cue without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn notify(&self) -> Result<(), NotifyError>;
}
