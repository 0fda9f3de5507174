//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - The default deck file and shuffle seed
//! - Whether usage examples are shown with the meaning
//! - The log level for the CLI
//!
//! Configuration is stored at `~/.config/flashdeck/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::data_dir;
use crate::error::ConfigError;

/// Study session preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Deck file used when `--deck` is not given. The built-in deck otherwise.
    #[serde(default)]
    pub deck: Option<String>,
    /// Fixed shuffle seed. Unset means a fresh order every session.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_true")]
    pub show_examples: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `flashdeck_core=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/flashdeck/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            deck: None,
            seed: None,
            show_examples: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key, e.g. `session.seed`.
    /// Unset optional values read as `null`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match lookup(&json, key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key and persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not fit the
    /// field, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Set a value in memory only. `none`/`null` unsets optional fields.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        let existing = lookup(&json, key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        for candidate in candidates(existing, value) {
            let mut next = json.clone();
            if let Some(slot) = lookup_mut(&mut next, key) {
                *slot = candidate;
            }
            if let Ok(cfg) = serde_json::from_value::<Config>(next) {
                *self = cfg;
                return Ok(());
            }
        }

        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("cannot use '{value}' here"),
        })
    }
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    key.split('.').try_fold(root, |node, part| node.as_object()?.get(part))
}

fn lookup_mut<'a>(root: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    key.split('.')
        .try_fold(root, |node, part| node.as_object_mut()?.get_mut(part))
}

/// Typed interpretations of a raw CLI value, most specific first. The
/// first one that deserializes into a valid `Config` wins.
///
/// Numbers are read as `i64`, the range of a TOML integer.
fn candidates(existing: &Value, raw: &str) -> Vec<Value> {
    let mut out = Vec::new();
    if matches!(raw, "none" | "null") {
        out.push(Value::Null);
    }
    match existing {
        Value::Bool(_) => out.extend(raw.parse::<bool>().ok().map(Value::Bool)),
        Value::Number(_) => out.extend(raw.parse::<i64>().ok().map(Value::from)),
        Value::String(_) => out.push(Value::String(raw.to_string())),
        Value::Null => {
            out.extend(raw.parse::<i64>().ok().map(Value::from));
            out.extend(raw.parse::<bool>().ok().map(Value::Bool));
            out.push(Value::String(raw.to_string()));
        }
        Value::Array(_) | Value::Object(_) => {
            out.extend(serde_json::from_str::<Value>(raw).ok());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert!(parsed.session.show_examples);
        assert_eq!(parsed.logging.level, "warn");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("session.show_examples").as_deref(), Some("true"));
        assert_eq!(cfg.get("logging.level").as_deref(), Some("warn"));
        assert_eq!(cfg.get("session.seed").as_deref(), Some("null"));
        assert!(cfg.get("session.missing").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn apply_sets_optional_number() {
        let mut cfg = Config::default();
        cfg.apply("session.seed", "42").unwrap();
        assert_eq!(cfg.session.seed, Some(42));
        cfg.apply("session.seed", "none").unwrap();
        assert_eq!(cfg.session.seed, None);
    }

    #[test]
    fn apply_sets_optional_string_even_if_numeric() {
        let mut cfg = Config::default();
        cfg.apply("session.deck", "2024").unwrap();
        assert_eq!(cfg.session.deck.as_deref(), Some("2024"));
    }

    #[test]
    fn apply_rejects_numbers_toml_cannot_store() {
        let mut cfg = Config::default();
        cfg.apply("session.seed", "3").unwrap();

        let err = cfg
            .apply("session.seed", "18446744073709551615")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(cfg.session.seed, Some(3));

        let err = cfg.apply("session.seed", "-1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        cfg.apply("session.seed", &i64::MAX.to_string()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().session.seed, Some(i64::MAX as u64));
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.apply("session.nope", "1").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn apply_rejects_invalid_type() {
        let mut cfg = Config::default();
        let err = cfg.apply("session.show_examples", "sometimes").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(cfg.session.show_examples);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.apply("session.seed", "7").unwrap();
        cfg.apply("logging.level", "debug").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.session.seed, Some(7));
        assert_eq!(loaded.logging.level, "debug");
    }

    #[test]
    fn load_from_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "session = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
