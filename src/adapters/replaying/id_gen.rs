//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::IdGenerator;

/// Serves recorded ids from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a replaying generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        let output = next_output(&self.replayer, "id_gen", "generate_id");
        output
            .as_str()
            .expect("id_gen::generate_id: expected string output")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;

    #[test]
    fn serves_ids_in_recorded_order() {
        let cassette = Cassette::from_yaml(
            r#"
name: ids
recorded_at: 2026-01-05T09:00:00Z
interactions:
  - {seq: 0, port: id_gen, method: generate_id, output: first}
  - {seq: 1, port: id_gen, method: generate_id, output: second}
"#,
        )
        .unwrap();
        let ids = ReplayingIdGenerator::new(CassetteReplayer::new(&cassette));

        assert_eq!(ids.generate_id(), "first");
        assert_eq!(ids.generate_id(), "second");
    }
}
