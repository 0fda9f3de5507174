//! Deck traversal.
//!
//! The cursor owns a permutation of the item ids that were eligible at the
//! last reshuffle and a position within it. Eligibility is always resolved
//! against the [`ReviewStore`] at the `now` the caller passes in.
//!
//! ## Transitions
//!
//! ```text
//! advance:  scan cursor+1 .. end        -> Moved | Reshuffled
//! retreat:  scan cursor-1 .. 0,
//!           then end .. cursor+1        -> Moved | Stayed
//! reshuffle: filter eligible, permute   -> Reshuffled (cursor = 0)
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::item::ItemId;
use crate::review::{EpochMs, ReviewStore};

/// Outcome of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The cursor landed on a new position.
    Moved { from: usize, to: usize },
    /// The ordering was rebuilt; the cursor is at 0 (or the deck is empty).
    Reshuffled { size: usize },
    /// No other eligible entry exists; the cursor did not move.
    Stayed,
}

/// Ordering plus position over a [`ReviewStore`]'s items.
#[derive(Debug, Clone)]
pub struct DeckCursor<R> {
    order: Vec<ItemId>,
    position: usize,
    rng: R,
}

impl<R: Rng> DeckCursor<R> {
    /// An empty deck. Nothing is shown until the first reshuffle.
    pub fn new(rng: R) -> Self {
        Self {
            order: Vec::new(),
            position: 0,
            rng,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn current(&self) -> Option<ItemId> {
        self.order.get(self.position).copied()
    }

    /// 0.0 .. 1.0 position within the ordering.
    pub fn progress_fraction(&self) -> f64 {
        if self.order.is_empty() {
            return 0.0;
        }
        let denominator = self.order.len().saturating_sub(1).max(1);
        self.position as f64 / denominator as f64
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the ordering with a random permutation of the items eligible
    /// at `now` and move to the front.
    pub fn reshuffle(&mut self, store: &ReviewStore, now: EpochMs) -> Move {
        let mut order = store.eligible(now);
        order.shuffle(&mut self.rng);
        self.order = order;
        self.position = 0;
        debug!(size = self.order.len(), now, "deck reshuffled");
        Move::Reshuffled {
            size: self.order.len(),
        }
    }

    /// Move to the next eligible entry, or start a new round when none is
    /// left ahead.
    pub fn advance(&mut self, store: &ReviewStore, now: EpochMs) -> Move {
        let from = self.position;
        let next = (from + 1..self.order.len()).find(|&i| store.is_item_eligible(self.order[i], now));
        match next {
            Some(to) => {
                self.position = to;
                debug!(from, to, "advanced");
                Move::Moved { from, to }
            }
            None => self.reshuffle(store, now),
        }
    }

    /// Move to the previous eligible entry, wrapping to the back of the
    /// ordering. The current position is never re-selected.
    pub fn retreat(&mut self, store: &ReviewStore, now: EpochMs) -> Move {
        let from = self.position;
        let eligible = |i: &usize| store.is_item_eligible(self.order[*i], now);
        let target = (0..from)
            .rev()
            .find(eligible)
            .or_else(|| (from + 1..self.order.len()).rev().find(eligible));
        match target {
            Some(to) => {
                self.position = to;
                debug!(from, to, "retreated");
                Move::Moved { from, to }
            }
            None => {
                debug!(from, "retreat found no other eligible entry");
                Move::Stayed
            }
        }
    }
}
