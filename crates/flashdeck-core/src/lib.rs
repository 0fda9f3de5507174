//! # Flashdeck Core Library
//!
//! This library provides the review scheduler and deck traversal engine
//! behind Flashdeck. Front ends (the `flashdeck-cli` binary, or anything
//! else that can render a card) own the clock and the screen; the core
//! only decides which card comes next and when a rated card is due again.
//!
//! ## Architecture
//!
//! - **Review store**: one [`ReviewRecord`] per item, keyed by [`ItemId`].
//!   Ratings map to a fixed interval table (easy 7d, good 3d, difficult 1d,
//!   repeat 10min).
//! - **Deck cursor**: a shuffled ordering of the items eligible at the last
//!   reshuffle, walked forward and backward while skipping cards that are
//!   no longer due.
//! - **Session**: composes the two and emits an [`Event`] per command.
//!
//! Every scheduling call takes `now` in epoch milliseconds. Nothing in this
//! crate reads the wall clock.
//!
//! ## Key Components
//!
//! - [`Session`]: The engine facade used by front ends
//! - [`ReviewStore`]: Review state and eligibility
//! - [`DeckCursor`]: Ordering and position
//! - [`DeckFile`]: Loading items from TOML/JSON
//! - [`Config`]: Application configuration management

pub mod deck;
pub mod error;
pub mod events;
pub mod item;
pub mod review;
pub mod session;
pub mod storage;

pub use deck::{DeckCursor, Move};
pub use error::{ConfigError, CoreError, DeckFileError, Result};
pub use events::Event;
pub use item::{Example, Item, ItemId};
pub use review::{Difficulty, EpochMs, ReviewRecord, ReviewStore};
pub use session::{CurrentCard, Session, SessionRng};
pub use storage::{Config, DeckFile};
