//! Difficulty ratings and the fixed interval table.
//!
//! | rating      | delay      |
//! |-------------|------------|
//! | `easy`      | 7 days     |
//! | `good`      | 3 days     |
//! | `difficult` | 1 day      |
//! | `repeat`    | 10 minutes |
//!
//! There is no ease factor and no back-off: the delay depends on the last
//! rating only.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Good,
    Difficult,
    Repeat,
}

impl Difficulty {
    /// All ratings, in the order the front end offers them.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Good,
        Difficulty::Difficult,
        Difficulty::Repeat,
    ];

    /// Delay between a rating and the item's next eligibility.
    pub fn interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::days(7),
            Difficulty::Good => Duration::days(3),
            Difficulty::Difficult => Duration::days(1),
            Difficulty::Repeat => Duration::minutes(10),
        }
    }

    pub fn interval_ms(self) -> u64 {
        // All table entries are positive.
        self.interval().num_milliseconds() as u64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Good => "good",
            Difficulty::Difficult => "difficult",
            Difficulty::Repeat => "repeat",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, good, difficult/hard or repeat)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts the rating names, the button label `hard`, and the
    /// keyboard shortcuts `1`..`4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "good" | "2" => Ok(Difficulty::Good),
            "difficult" | "hard" | "3" => Ok(Difficulty::Difficult),
            "repeat" | "4" => Ok(Difficulty::Repeat),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
