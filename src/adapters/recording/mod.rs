//! Recording adapters that capture interactions to a cassette.
//!
//! Each adapter delegates to an inner implementation and appends the call
//! and its result to a shared [`CassetteRecorder`].

pub mod id_gen;
pub mod quotes;
pub mod search;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use id_gen::RecordingIdGenerator;
pub use quotes::RecordingQuoteSource;
pub use search::RecordingSearchSource;

/// Shared handle to the recorder used by every adapter in a session.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Records a call whose output is a plain value.
pub(crate) fn record_value<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);
    let output = serde_json::to_value(output).unwrap_or(serde_json::Value::Null);
    recorder
        .lock()
        .expect("recorder lock poisoned")
        .record(port, method, input, output);
}

/// Records a fallible call as `{"Ok": value}` or `{"Err": message}`.
pub(crate) fn record_result<I, T, E>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    I: Serialize,
    T: Serialize,
    E: std::fmt::Display,
{
    let output = match result {
        Ok(value) => serde_json::json!({ "Ok": value }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };
    record_value(recorder, port, method, input, &output);
}
