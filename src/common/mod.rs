//! Common value types and utilities.

mod frequency;
mod level;

pub use frequency::Frequency;
pub use level::{db_to_gain, gain_to_db, LevelExt};
