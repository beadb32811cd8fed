//! The pomodoro state machine, free of any clock.
//!
//! ```text
//!            focus done, count % 4 != 0
//!   Focus ─────────────────────────────▶ ShortBreak
//!     ▲  ╲  focus done, count % 4 == 0        │
//!     │   ╲──────────────────────────▶ LongBreak
//!     │          break done                  │
//!     └──────────────────────────────────────┘
//! ```
//!
//! `switch_mode` may jump to any state at any time.

use super::mode::{Mode, LONG_BREAK_EVERY};

/// Outcome of an interval reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Interval that just finished.
    pub finished: Mode,
    /// Interval the timer moved to (paused, full length).
    pub next: Mode,
    /// Focus sessions completed so far, including this one.
    pub completed_focus_sessions: u32,
}

/// Countdown state.
///
/// `seconds_remaining` always lies in `0..=mode.duration_secs()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    mode: Mode,
    seconds_remaining: u32,
    is_running: bool,
    completed_focus_sessions: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerState {
    /// A paused, full-length focus interval with no sessions completed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Focus,
            seconds_remaining: Mode::Focus.duration_secs(),
            is_running: false,
            completed_focus_sessions: 0,
        }
    }

    /// Current interval kind.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left in the current interval.
    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Whether ticks are being counted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Focus intervals that have run to zero.
    #[must_use]
    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    /// Resumes counting.
    pub fn start(&mut self) {
        self.is_running = true;
    }

    /// Stops counting, keeping the remaining time.
    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Refills the current interval and pauses. Mode and session count are
    /// kept.
    pub fn reset(&mut self) {
        self.seconds_remaining = self.mode.duration_secs();
        self.is_running = false;
    }

    /// Jumps to `mode` with a full, paused interval.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.seconds_remaining = mode.duration_secs();
        self.is_running = false;
    }

    /// Counts one second down.
    ///
    /// Ignored while paused. When the interval reaches zero the timer stops,
    /// moves to the next interval and reports the transition.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.is_running {
            return None;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining > 0 {
            return None;
        }
        Some(self.complete())
    }

    fn complete(&mut self) -> Completion {
        let finished = self.mode;
        let next = if finished == Mode::Focus {
            self.completed_focus_sessions += 1;
            if self.completed_focus_sessions % LONG_BREAK_EVERY == 0 {
                Mode::LongBreak
            } else {
                Mode::ShortBreak
            }
        } else {
            Mode::Focus
        };
        self.switch_mode(next);
        Completion {
            finished,
            next,
            completed_focus_sessions: self.completed_focus_sessions,
        }
    }

    /// Fraction of the interval elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.mode.duration_secs();
        f64::from(total - self.seconds_remaining.min(total)) / f64::from(total)
    }

    /// Remaining time as `mm:ss`.
    #[must_use]
    pub fn clock_face(&self) -> String {
        let (minutes, seconds) = (self.seconds_remaining / 60, self.seconds_remaining % 60);
        format!("{minutes:02}:{seconds:02}")
    }
}
