use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::review::{Difficulty, EpochMs};

/// Every state change in a study session produces an Event.
/// Front ends render from them; `at` always mirrors the injected `now`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The ordering was rebuilt from the items eligible at `at`.
    DeckReshuffled {
        size: usize,
        at: DateTime<Utc>,
    },
    /// The cursor landed on a card.
    CardShown {
        item_id: ItemId,
        position: usize,
        total: usize,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
    /// Retreat found no other eligible card; the previous one stays on screen.
    RetreatBlocked {
        at: DateTime<Utc>,
    },
    CardRated {
        item_id: ItemId,
        difficulty: Difficulty,
        next_eligible_at: EpochMs,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        current: Option<ItemId>,
        position: usize,
        total: usize,
        progress_pct: f64,
        revealed: bool,
        eligible_count: usize,
        item_count: usize,
        at: DateTime<Utc>,
    },
}
