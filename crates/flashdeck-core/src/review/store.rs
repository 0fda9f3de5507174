//! Authoritative review state.
//!
//! The store is the only owner of [`ReviewRecord`]s. Decks and front ends
//! hold [`ItemId`]s and resolve them here, so a rating is visible through
//! every view of the item as soon as it is applied.

use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;
use tracing::info;

use super::difficulty::Difficulty;
use super::record::{EpochMs, ReviewRecord};
use crate::error::{CoreError, Result};
use crate::item::{Item, ItemId};

#[derive(Debug, Clone)]
struct Entry {
    item: Item,
    record: ReviewRecord,
}

/// Items paired with their review state, in the order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    entries: IndexMap<ItemId, Entry>,
}

impl ReviewStore {
    /// Register every item with a never-reviewed record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateItem`] if two items share an id.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let mut entries = IndexMap::new();
        for item in items {
            match entries.entry(item.id) {
                MapEntry::Occupied(_) => return Err(CoreError::DuplicateItem(item.id)),
                MapEntry::Vacant(slot) => {
                    slot.insert(Entry {
                        item,
                        record: ReviewRecord::new(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Record a rating made at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownItem`] if `id` was never registered.
    pub fn rate(&mut self, id: ItemId, difficulty: Difficulty, now: EpochMs) -> Result<&ReviewRecord> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(CoreError::UnknownItem(id))?;
        entry.record.apply(difficulty, now);
        info!(
            item = %id,
            %difficulty,
            next_eligible_at = entry.record.next_eligible_at,
            "item rated"
        );
        Ok(&entry.record)
    }

    pub fn is_eligible(record: &ReviewRecord, now: EpochMs) -> bool {
        record.is_eligible(now)
    }

    /// Unknown ids are never eligible.
    pub fn is_item_eligible(&self, id: ItemId, now: EpochMs) -> bool {
        self.record(id).is_some_and(|r| r.is_eligible(now))
    }

    /// Ids of the items due at `now`, in store order.
    pub fn eligible(&self, now: EpochMs) -> Vec<ItemId> {
        self.entries
            .iter()
            .filter(|(_, e)| e.record.is_eligible(now))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn eligible_count(&self, now: EpochMs) -> usize {
        self.entries
            .values()
            .filter(|e| e.record.is_eligible(now))
            .count()
    }

    pub fn all(&self) -> impl Iterator<Item = (&Item, &ReviewRecord)> + '_ {
        self.entries.values().map(|e| (&e.item, &e.record))
    }

    pub fn get(&self, id: ItemId) -> Option<(&Item, &ReviewRecord)> {
        self.entries.get(&id).map(|e| (&e.item, &e.record))
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.entries.get(&id).map(|e| &e.item)
    }

    pub fn record(&self, id: ItemId) -> Option<&ReviewRecord> {
        self.entries.get(&id).map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
