mod cursor;

pub use cursor::{DeckCursor, Move};
