//! Study items.
//!
//! Items are immutable inputs. The engine only ever looks at [`Item::id`];
//! the remaining fields are display content passed through to the front end.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a study item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A usage example shown on the back of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub topic: String,
    pub example: String,
}

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub phrase: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Illustration URL, if the deck ships one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Create an item with only a front side.
    pub fn new(id: impl Into<ItemId>, phrase: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phrase: phrase.into(),
            translation: String::new(),
            meaning: String::new(),
            examples: Vec::new(),
            image: None,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    pub fn with_example(mut self, topic: impl Into<String>, example: impl Into<String>) -> Self {
        self.examples.push(Example {
            topic: topic.into(),
            example: example.into(),
        });
        self
    }
}
