use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::difficulty::Difficulty;

/// Milliseconds since the Unix epoch, as supplied by the caller.
pub type EpochMs = u64;

/// Sentinel for "never reviewed". An unrated record is due at time zero,
/// so it is eligible for every `now`.
pub const NEVER: EpochMs = 0;

/// Review state of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub last_reviewed_at: EpochMs,
    pub next_eligible_at: EpochMs,
    #[serde(default)]
    pub last_difficulty: Option<Difficulty>,
}

impl ReviewRecord {
    /// A never-reviewed record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_eligible(&self, now: EpochMs) -> bool {
        self.next_eligible_at <= now
    }

    pub fn is_reviewed(&self) -> bool {
        self.last_difficulty.is_some()
    }

    /// Milliseconds until the item becomes eligible again (0 when due).
    pub fn remaining_ms(&self, now: EpochMs) -> u64 {
        self.next_eligible_at.saturating_sub(now)
    }

    /// `None` until the item has been rated once.
    pub fn next_eligible_datetime(&self) -> Option<DateTime<Utc>> {
        self.is_reviewed().then(|| to_datetime(self.next_eligible_at))
    }

    pub(crate) fn apply(&mut self, difficulty: Difficulty, now: EpochMs) {
        self.last_reviewed_at = now;
        self.next_eligible_at = now.saturating_add(difficulty.interval_ms());
        self.last_difficulty = Some(difficulty);
    }
}

/// Convert an injected timestamp to a `DateTime`.
///
/// chrono tops out around the year 262142. Anything past that is clamped
/// to the epoch and logged at `warn`; scheduling itself keeps using the raw
/// millisecond value.
pub fn to_datetime(ms: EpochMs) -> DateTime<Utc> {
    match i64::try_from(ms).ok().and_then(DateTime::from_timestamp_millis) {
        Some(at) => at,
        None => {
            warn!(ms, "timestamp outside the representable range, clamped to the epoch");
            DateTime::<Utc>::default()
        }
    }
}
