//! Core error types for flashdeck-core.
//!
//! The scheduling engine itself can only fail on programming errors
//! (an id that was never registered). Everything else here belongs to the
//! ambient layers: configuration and deck files.

use std::path::PathBuf;
use thiserror::Error;

use crate::item::ItemId;

/// Core error type for flashdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A rating named an item the store never registered.
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    /// Two items in the initial set share an id.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Deck file errors
    #[error("Deck file error: {0}")]
    DeckFile(#[from] DeckFileError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the config directory
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the config tree
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while reading a deck of items from disk.
#[derive(Error, Debug)]
pub enum DeckFileError {
    #[error("Failed to read deck file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML deck {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON deck {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Only `.toml` and `.json` decks are understood
    #[error("Unsupported deck format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
