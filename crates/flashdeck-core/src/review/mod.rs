mod difficulty;
mod record;
mod store;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use record::{to_datetime, EpochMs, ReviewRecord, NEVER};
pub use store::ReviewStore;
