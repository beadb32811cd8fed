//! A [`TimerState`] driven by a live [`Ticker`], with the completion cue.

use std::time::Duration;

use super::mode::Mode;
use super::state::{Completion, TimerState};
use super::ticker::Ticker;
use crate::ports::Notifier;

/// Something the host should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed.
    Tick {
        /// Seconds left in the interval.
        remaining: u32,
    },
    /// The interval ran out and the timer moved on (paused).
    Completed(Completion),
}

/// Pomodoro timer owning its tick source.
///
/// A [`Ticker`] exists exactly while the timer runs: `start` spawns one;
/// `pause`, `reset`, `switch_mode`, completion and drop cancel it.
pub struct SessionTimer<'a> {
    state: TimerState,
    period: Duration,
    notifier: &'a dyn Notifier,
    ticker: Option<Ticker>,
}

impl<'a> SessionTimer<'a> {
    /// Creates a paused focus timer that ticks every `period` once started.
    pub fn new(notifier: &'a dyn Notifier, period: Duration) -> Self {
        Self {
            state: TimerState::new(),
            period,
            notifier,
            ticker: None,
        }
    }

    /// Current countdown state.
    #[must_use]
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Starts counting down. No-op if already running.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(&mut self) {
        if self.state.is_running() {
            return;
        }
        self.state.start();
        self.ticker = Some(Ticker::spawn(self.period));
    }

    /// Stops counting down, keeping the remaining time.
    pub fn pause(&mut self) {
        self.state.pause();
        self.stop_ticker();
    }

    /// Starts if paused, pauses if running.
    pub fn toggle(&mut self) {
        if self.state.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Refills the current interval and pauses.
    pub fn reset(&mut self) {
        self.state.reset();
        self.stop_ticker();
    }

    /// Jumps to `mode`, paused at full length.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.state.switch_mode(mode);
        self.stop_ticker();
    }

    /// Waits for the next tick and applies it.
    ///
    /// Returns `None` immediately when the timer is not running.
    pub async fn next_event(&mut self) -> Option<TimerEvent> {
        let ticker = self.ticker.as_mut()?;
        ticker.tick().await?;

        let Some(completion) = self.state.tick() else {
            let remaining = self.state.seconds_remaining();
            return Some(TimerEvent::Tick { remaining });
        };

        self.stop_ticker();
        if let Err(e) = self.notifier.notify() {
            tracing::debug!("completion cue not played: {e}");
        }
        tracing::info!(
            finished = %completion.finished,
            next = %completion.next,
            sessions = completion.completed_focus_sessions,
            "interval complete"
        );
        Some(TimerEvent::Completed(completion))
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
