//! Recording adapter for the `IdGenerator` port.

use super::{record_value, SharedRecorder};
use crate::ports::IdGenerator;

/// Records generated ids while delegating to an inner generator.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: SharedRecorder,
}

impl RecordingIdGenerator {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn IdGenerator>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate_id(&self) -> String {
        let id = self.inner.generate_id();
        record_value(&self.recorder, "id_gen", "generate_id", &(), &id);
        id
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::memory::SequentialIdGenerator;
    use crate::cassette::recorder::CassetteRecorder;

    #[test]
    fn records_each_generated_id() {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new("/unused", "test")));
        let ids = RecordingIdGenerator::new(
            Box::new(SequentialIdGenerator::new()),
            Arc::clone(&recorder),
        );

        assert_eq!(ids.generate_id(), "task-1");
        assert_eq!(ids.generate_id(), "task-2");

        assert_eq!(recorder.lock().unwrap().len(), 2);
    }
}
