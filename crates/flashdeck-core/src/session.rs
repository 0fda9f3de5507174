//! Study session: the review store and deck cursor driven together.
//!
//! A session is a plain value. Nothing in it reads a clock or spawns work;
//! every command takes the caller's `now` (epoch milliseconds) and returns
//! the [`Event`] describing what changed.
//!
//! `now` may be any `u64`. Event timestamps past chrono's range (about the
//! year 262142) are reported as the epoch; see [`to_datetime`].
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = Session::seeded(items, 7)?;
//! session.reshuffle(now);
//! if let Some(card) = session.current() {
//!     render(card.item);
//! }
//! session.rate(Difficulty::Good, now)?; // rates, then advances
//! ```

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use tracing::{debug, warn};

use crate::deck::{DeckCursor, Move};
use crate::error::Result;
use crate::events::Event;
use crate::item::Item;
use crate::review::{to_datetime, Difficulty, EpochMs, ReviewRecord, ReviewStore};

/// Random source used for shuffling outside of tests.
pub type SessionRng = Mcg128Xsl64;

/// The card under the cursor, resolved against the store.
#[derive(Debug, Clone, Copy)]
pub struct CurrentCard<'a> {
    pub item: &'a Item,
    pub record: &'a ReviewRecord,
    pub position: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct Session<R = SessionRng> {
    store: ReviewStore,
    deck: DeckCursor<R>,
    /// Whether the back of the card (meaning, examples) is shown.
    revealed: bool,
}

impl Session<SessionRng> {
    /// Session with a reproducible shuffle order.
    pub fn seeded(items: impl IntoIterator<Item = Item>, seed: u64) -> Result<Self> {
        Self::initialize(items, Mcg128Xsl64::seed_from_u64(seed))
    }

    pub fn from_entropy(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        Self::initialize(items, Mcg128Xsl64::from_entropy())
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn with_seed(items: impl IntoIterator<Item = Item>, seed: Option<u64>) -> Result<Self> {
        match seed {
            Some(seed) => Self::seeded(items, seed),
            None => Self::from_entropy(items),
        }
    }
}

impl<R: Rng> Session<R> {
    /// Build never-reviewed records for `items` and an empty deck.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::CoreError::DuplicateItem`] when ids repeat.
    pub fn initialize(items: impl IntoIterator<Item = Item>, rng: R) -> Result<Self> {
        let store = ReviewStore::new(items)?;
        debug!(items = store.len(), "session initialized");
        Ok(Self {
            store,
            deck: DeckCursor::new(rng),
            revealed: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn deck(&self) -> &DeckCursor<R> {
        &self.deck
    }

    /// `None` when no card is available for review.
    pub fn current(&self) -> Option<CurrentCard<'_>> {
        let id = self.deck.current()?;
        let (item, record) = self.store.get(id)?;
        Some(CurrentCard {
            item,
            record,
            position: self.deck.position(),
            total: self.deck.len(),
        })
    }

    /// 0.0 .. 100.0 position within the current round.
    pub fn progress(&self) -> f64 {
        self.deck.progress_fraction() * 100.0
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, now: EpochMs) -> Event {
        Event::StateSnapshot {
            current: self.deck.current(),
            position: self.deck.position(),
            total: self.deck.len(),
            progress_pct: self.progress(),
            revealed: self.revealed,
            eligible_count: self.store.eligible_count(now),
            item_count: self.store.len(),
            at: to_datetime(now),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Show or hide the back of the card. Returns the new state.
    pub fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    pub fn reshuffle(&mut self, now: EpochMs) -> Event {
        let mv = self.deck.reshuffle(&self.store, now);
        self.after_move(mv, now)
    }

    pub fn advance(&mut self, now: EpochMs) -> Event {
        let mv = self.deck.advance(&self.store, now);
        self.after_move(mv, now)
    }

    pub fn retreat(&mut self, now: EpochMs) -> Event {
        let mv = self.deck.retreat(&self.store, now);
        self.after_move(mv, now)
    }

    /// Rate the current card, then advance with the same `now` so the
    /// rated card is skipped if it just became ineligible.
    ///
    /// Returns the rating event followed by the navigation event, or an
    /// empty list when no card is showing.
    ///
    /// # Errors
    ///
    /// Only fails if the deck references an id the store does not know.
    pub fn rate(&mut self, difficulty: Difficulty, now: EpochMs) -> Result<Vec<Event>> {
        let Some(id) = self.deck.current() else {
            debug!(%difficulty, "rating ignored: no card available");
            return Ok(Vec::new());
        };
        let record = self.store.rate(id, difficulty, now)?;
        let rated = Event::CardRated {
            item_id: id,
            difficulty,
            next_eligible_at: record.next_eligible_at,
            at: to_datetime(now),
        };
        let moved = self.advance(now);
        Ok(vec![rated, moved])
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn after_move(&mut self, mv: Move, now: EpochMs) -> Event {
        let at = to_datetime(now);
        match mv {
            Move::Moved { to, .. } => {
                self.revealed = false;
                Event::CardShown {
                    item_id: self.deck.order()[to],
                    position: to,
                    total: self.deck.len(),
                    progress_pct: self.progress(),
                    at,
                }
            }
            Move::Reshuffled { size } => {
                self.revealed = false;
                Event::DeckReshuffled { size, at }
            }
            Move::Stayed => {
                if !self.deck.is_empty() {
                    warn!(position = self.deck.position(), "no other card available to go back to");
                }
                Event::RetreatBlocked { at }
            }
        }
    }
}
