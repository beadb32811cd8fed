//! Replaying adapters that serve recorded interactions.

pub mod id_gen;
pub mod quotes;
pub mod search;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::quotes::FetchError;

pub use id_gen::ReplayingIdGenerator;
pub use quotes::ReplayingQuoteSource;
pub use search::ReplayingSearchSource;

/// Pulls the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output.clone()
}

/// Decodes a recorded `{"Ok": ..}` / `{"Err": ".."}` output.
///
/// # Panics
///
/// Panics if the output has neither shape or the `Ok` payload does not
/// decode into `T`; the cassette does not match this build.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    lane: &str,
) -> Result<T, FetchError> {
    if let Some(ok) = output.get("Ok") {
        match serde_json::from_value(ok.clone()) {
            Ok(value) => return Ok(value),
            Err(e) => panic!("{lane}: recorded Ok value does not decode: {e}"),
        }
    }
    if let Some(err) = output.get("Err") {
        let message = match err.as_str() {
            Some(text) => text.to_string(),
            None => err.to_string(),
        };
        return Err(FetchError::Replayed(message));
    }
    panic!("{lane}: recorded output is neither Ok nor Err: {output}");
}
