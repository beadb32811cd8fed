//! Adapter implementations of the port traits.
//!
//! - `live`: real disk, network, audio and randomness.
//! - `memory`: process-local stand-ins for tests and offline use.
//! - `recording` / `replaying`: cassette capture and playback of the
//!   non-deterministic ports.

pub mod live;
pub mod memory;
pub mod recording;
pub mod replaying;
