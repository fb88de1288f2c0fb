//! Typed identifier for items.
//!
//! Ids are `<timestamp>-<suffix>`, both parts in lowercase base 36. The
//! timestamp is milliseconds since the Unix epoch and the suffix is drawn
//! from `0..1_000_000`. Good enough for low-contention uniqueness, not
//! collision-proof and not a secret.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

const RANDOM_SUFFIX_BOUND: u64 = 1_000_000;

/// Unique identifier for an [`Item`](crate::item::Item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh identifier from the current time and a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let suffix = rand::thread_rng().gen_range(0..RANDOM_SUFFIX_BOUND);
        Self(format!("{}-{}", to_base36(millis), to_base36(suffix)))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Any string is accepted: ids are opaque once issued, and lookups of
// unknown ids are answered with "not found" rather than a parse error.
impl FromStr for ItemId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
