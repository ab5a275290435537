//! Storage-shaped records
//!
//! These types only travel between the repository and bridge layers.
//! Business code works with the [`crate::model`] types instead.

pub mod log_entry;
pub mod player;
pub mod team;

pub use log_entry::LogEntryRecord;
pub use player::PlayerRecord;
pub use team::TeamRecord;

/// Names of the fields whose presence flag is false
fn absent(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}
