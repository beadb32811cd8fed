//! Cassette format for recording and replaying port interactions.
//!
//! Only the non-deterministic ports (quote service, search service and id
//! generation) are captured. A cassette recorded against the live services
//! can be replayed later to reproduce a session exactly.

pub mod format;
pub mod recorder;
pub mod replayer;
