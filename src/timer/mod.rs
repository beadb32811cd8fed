//! Pomodoro timer: focus, short-break and long-break intervals.

pub mod mode;
pub mod session;
pub mod state;
pub mod ticker;

pub use mode::{Mode, LONG_BREAK_EVERY};
pub use session::{SessionTimer, TimerEvent};
pub use state::{Completion, TimerState};
pub use ticker::Ticker;
