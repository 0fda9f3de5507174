//! Deck files: the static item data a session is built from.
//!
//! A deck is a list of `[[items]]` in TOML or an `{"items": [...]}` JSON
//! document. The format is picked from the file extension.

use std::path::Path;

use indoc::indoc;
use serde::{Deserialize, Serialize};

use crate::error::DeckFileError;
use crate::item::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

enum Format {
    Toml,
    Json,
}

const BUILTIN_DECK: &str = indoc! {r#"
    title = "\"Look\" Idiom Flashcards"

    [[items]]
    id = 1
    phrase = "Look up"
    translation = "Cercare"
    meaning = "To search for information in a reference book or database"
    image = "https://via.placeholder.com/400x300.png?text=Look+up"
    examples = [
        { topic = "Research", example = "I need to look up the meaning of this word in the dictionary." },
        { topic = "Technology", example = "She looked up the restaurant's address on her smartphone." },
        { topic = "Education", example = "Students are encouraged to look up unfamiliar terms while reading." },
    ]

    [[items]]
    id = 2
    phrase = "Look after"
    translation = "Prendersi cura di"
    meaning = "To take care of or be responsible for someone or something"
    image = "https://via.placeholder.com/400x300.png?text=Look+after"
    examples = [
        { topic = "Family", example = "Can you look after my cat while I'm on vacation?" },
        { topic = "Business", example = "The manager looks after all the new employees during their first week." },
        { topic = "Health", example = "It's important to look after your mental health as well as your physical health." },
    ]

    [[items]]
    id = 3
    phrase = "Look into"
    translation = "Indagare"
    meaning = "To investigate or examine a matter"
    examples = [
        { topic = "Work", example = "The support team will look into the billing issue today." },
        { topic = "Law", example = "The police are looking into the cause of the fire." },
    ]

    [[items]]
    id = 4
    phrase = "Look forward to"
    translation = "Non vedere l'ora di"
    meaning = "To feel pleased and excited about something that is going to happen"
    examples = [
        { topic = "Travel", example = "We're looking forward to our trip to Rome." },
        { topic = "Correspondence", example = "I look forward to hearing from you." },
    ]

    [[items]]
    id = 5
    phrase = "Look out"
    translation = "Fare attenzione"
    meaning = "To be careful; used as a warning of danger"
    examples = [
        { topic = "Safety", example = "Look out! There's a car coming." },
        { topic = "Sports", example = "Look out for the defender on your left." },
    ]

    [[items]]
    id = 6
    phrase = "Look down on"
    translation = "Disprezzare"
    meaning = "To consider someone inferior or less important"
    examples = [
        { topic = "Society", example = "He looks down on anyone who didn't go to university." },
    ]
"#};

impl DeckFile {
    /// The sample deck bundled with the binary.
    pub fn builtin() -> Self {
        // Parsed in `builtin_deck_parses`.
        Self::from_toml_str(BUILTIN_DECK).unwrap_or_default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load a `.toml` or `.json` deck.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, malformed content, or any other extension.
    pub fn load(path: &Path) -> Result<Self, DeckFileError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let format = match ext.as_deref() {
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => return Err(DeckFileError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| DeckFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match format {
            Format::Toml => toml::from_str(&content).map_err(|source| DeckFileError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            Format::Json => serde_json::from_str(&content).map_err(|source| DeckFileError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load `path` when given, the built-in deck otherwise.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DeckFileError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }
}
