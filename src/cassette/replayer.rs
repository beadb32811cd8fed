//! Serves recorded interactions back in order, one queue per port method.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Replays a cassette.
///
/// Interactions are grouped into lanes keyed by `(port, method)`; each lane
/// is consumed independently, so the relative order of calls to different
/// ports does not need to match the recording.
pub struct CassetteReplayer {
    lanes: HashMap<(String, String), Vec<Interaction>>,
    cursors: HashMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Builds a replayer over every interaction in `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut lanes: HashMap<(String, String), Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            lanes
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push(interaction.clone());
        }
        Self {
            lanes,
            cursors: HashMap::new(),
        }
    }

    /// Returns `true` if the cassette recorded any call to `port`.
    #[must_use]
    pub fn covers_port(&self, port: &str) -> bool {
        self.lanes.keys().any(|(p, _)| p == port)
    }

    /// Returns the next recorded interaction for `port::method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the lane. A
    /// replay that diverges from its recording is a broken fixture.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(lane) = self.lanes.get(&key) else {
            let keys = self.lanes.keys();
            let mut recorded: Vec<String> = keys.map(|(p, m)| format!("{p}::{m}")).collect();
            recorded.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Recorded lanes: [{}]",
                recorded.join(", ")
            );
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        assert!(
            *cursor < lane.len(),
            "Cassette exhausted: all {} interactions for {port}::{method} were already served",
            lane.len(),
        );
        let interaction = &lane[*cursor];
        *cursor += 1;
        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input: json!(null),
            output,
        }
    }

    fn cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: String::new(),
            interactions,
        }
    }

    #[test]
    fn lanes_are_served_independently_in_order() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![
            interaction(0, "id_gen", "generate_id", json!("a")),
            interaction(1, "quotes", "random_quote", json!({"Ok": {"content": "q"}})),
            interaction(2, "id_gen", "generate_id", json!("b")),
        ]));

        assert_eq!(replayer.next_interaction("quotes", "random_quote").seq, 1);
        assert_eq!(
            replayer.next_interaction("id_gen", "generate_id").output,
            json!("a")
        );
        assert_eq!(
            replayer.next_interaction("id_gen", "generate_id").output,
            json!("b")
        );
    }

    #[test]
    fn covers_port_reports_recorded_ports() {
        let lane = interaction(0, "search", "related_topics", json!({"Ok": []}));
        let replayer = CassetteReplayer::new(&cassette(vec![lane]));
        assert!(replayer.covers_port("search"));
        assert!(!replayer.covers_port("quotes"));
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_lane_panics() {
        let lane = interaction(0, "id_gen", "generate_id", json!("a"));
        let mut replayer = CassetteReplayer::new(&cassette(vec![lane]));
        let _ = replayer.next_interaction("id_gen", "generate_id");
        let _ = replayer.next_interaction("id_gen", "generate_id");
    }

    #[test]
    #[should_panic(expected = "no interactions recorded for search::related_topics")]
    fn unknown_lane_panics() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![]));
        let _ = replayer.next_interaction("search", "related_topics");
    }
}
