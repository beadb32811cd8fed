//! Pomodoro interval kinds and their fixed durations.

use std::fmt;
use std::str::FromStr;

use crate::choice::{normalise, UnknownChoice};

/// Every this many completed focus sessions, the break is a long one.
pub const LONG_BREAK_EVERY: u32 = 4;

/// Kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// A work session.
    #[default]
    Focus,
    /// A short rest after a focus session.
    ShortBreak,
    /// A longer rest after every fourth focus session.
    LongBreak,
}

impl Mode {
    /// Interval length in seconds.
    #[must_use]
    pub fn duration_secs(self) -> u32 {
        match self {
            Self::Focus => 25 * 60,
            Self::ShortBreak => 5 * 60,
            Self::LongBreak => 15 * 60,
        }
    }

    /// Heading shown while this interval runs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus Session",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Focus => "focus",
            Self::ShortBreak => "short-break",
            Self::LongBreak => "long-break",
        })
    }
}

impl FromStr for Mode {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "focus" | "work" => Ok(Self::Focus),
            "short-break" | "shortbreak" | "short" => Ok(Self::ShortBreak),
            "long-break" | "longbreak" | "long" => Ok(Self::LongBreak),
            _ => Err(UnknownChoice {
                kind: "timer mode",
                value: s.to_string(),
                expected: "focus, short-break, long-break",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(Mode::Focus.duration_secs(), 1_500);
        assert_eq!(Mode::ShortBreak.duration_secs(), 300);
        assert_eq!(Mode::LongBreak.duration_secs(), 900);
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("focus".parse::<Mode>().unwrap(), Mode::Focus);
        assert_eq!("shortBreak".parse::<Mode>().unwrap(), Mode::ShortBreak);
        assert_eq!("short_break".parse::<Mode>().unwrap(), Mode::ShortBreak);
        assert_eq!("LONG".parse::<Mode>().unwrap(), Mode::LongBreak);
        assert!("nap".parse::<Mode>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in [Mode::Focus, Mode::ShortBreak, Mode::LongBreak] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }
}
