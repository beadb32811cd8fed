//! Live audio cue played through the platform's command-line player.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::ports::notifier::{Notifier, NotifyError};

/// Plays a sound file with `afplay` (macOS), `paplay` (`.ogg`) or `aplay`.
///
/// The player runs on a detached thread so the caller never waits for the
/// sound to finish.
pub struct SoundNotifier {
    sound_file: PathBuf,
}

impl SoundNotifier {
    /// Creates a notifier that plays `sound_file`.
    #[must_use]
    pub fn new(sound_file: &Path) -> Self {
        Self {
            sound_file: sound_file.to_path_buf(),
        }
    }
}

fn player_for(path: &Path) -> &'static str {
    if cfg!(target_os = "macos") {
        return "afplay";
    }
    let is_ogg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ogg"));
    if is_ogg { "paplay" } else { "aplay" }
}

impl Notifier for SoundNotifier {
    fn notify(&self) -> Result<(), NotifyError> {
        if !self.sound_file.exists() {
            return Err(NotifyError::MissingAsset(self.sound_file.display().to_string()));
        }

        let player = player_for(&self.sound_file);
        tracing::debug!(player, file = %self.sound_file.display(), "playing completion cue");

        let mut child = Command::new(player)
            .arg(&self.sound_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| NotifyError::Player {
                player: player.to_string(),
                source,
            })?;

        std::thread::spawn(move || {
            if let Err(e) = child.wait() {
                tracing::debug!("audio player did not exit cleanly: {e}");
            }
        });
        Ok(())
    }
}
