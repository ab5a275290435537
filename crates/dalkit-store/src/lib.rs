//! dalkit store - SQLite backing for the repository contract
//!
//! Provides:
//! - Connection helpers and an embedded, checksummed migration runner
//! - [`SqliteRepository`], a drop-in [`dalkit_core::Repository`] over a
//!   SQLite table, with the same validation and not-found semantics as the
//!   in-memory repository
//! - [`SqlRecord`] mappings for the team, player and log entry records

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use db::SharedConnection;
pub use repo::{SqlRecord, SqliteRepository};
