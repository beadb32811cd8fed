//! Live adapter for the `IdGenerator` port.

use chrono::Utc;
use uuid::Uuid;

use crate::ports::IdGenerator;

const RANDOM_SUFFIX_LEN: u32 = 4;

/// Live ID generator producing short, roughly time-ordered ids.
///
/// An id is the current Unix time in milliseconds written in base 36,
/// followed by four random base-36 characters drawn from a v4 UUID.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        let millis = u128::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let suffix = Uuid::new_v4().as_u128() % 36u128.pow(RANDOM_SUFFIX_LEN);
        let mut id = to_base36(millis);
        id.push_str(&format!("{:0>4}", to_base36(suffix)));
        id
    }
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        // value % 36 < 36, so the index is always in range.
        #[allow(clippy::cast_possible_truncation)]
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
