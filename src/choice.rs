//! Parsing of the small closed sets of values users type on the command line.

use thiserror::Error;

/// A value outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}; expected one of: {expected}")]
pub struct UnknownChoice {
    /// What was being parsed ("priority", "filter", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted spellings.
    pub expected: &'static str,
}

/// Normalises user input for comparison: trimmed, lowercase, `_` and
/// spaces folded to `-`.
pub(crate) fn normalise(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalise_folds_case_and_separators() {
        assert_eq!(normalise("  Short_Break "), "short-break");
        assert_eq!(normalise("HIGH"), "high");
    }

    #[test]
    fn message_lists_expected_values() {
        let err = UnknownChoice {
            kind: "filter",
            value: "later".into(),
            expected: "all, active, done",
        };
        assert_eq!(
            err.to_string(),
            "unknown filter \"later\"; expected one of: all, active, done"
        );
    }
}
