//! dalkit core - data access layer
//!
//! This crate provides:
//! - A generic [`Repository`] contract over flat [`Record`] types, with an
//!   in-memory backing ([`MemoryRepository`])
//! - A [`DomainBridge`] layer converting records to business objects and
//!   resolving related entities
//! - Team/Player records, domain types and bridges
//! - A [`log_store::RepositorySink`] persisting routed log messages
//! - The structured error facility and `tracing` logging facility shared by
//!   the other dalkit crates
//!
//! ```
//! use dalkit_core::{DomainBridge, Player, PlayerBridge, Position, Team, TeamBridge};
//!
//! let teams = TeamBridge::in_memory();
//! let players = PlayerBridge::in_memory(teams.clone());
//!
//! let mut bos = Team::new(Some(0), "Boston", "Red Sox", "BOS");
//! teams.save(&mut bos).unwrap();
//! let mut ortiz = Player::new(Some(0), "David", "Ortiz", 34, bos.id, Position::DesignatedHitter);
//! players.save(&mut ortiz).unwrap();
//!
//! let player = players.retrieve(0).unwrap().unwrap();
//! assert_eq!(player.team().unwrap().city.as_deref(), Some("Boston"));
//! ```

pub mod bridge;
pub mod errors;
pub mod log_store;
pub mod logging_facility;
pub mod model;
pub mod records;
pub mod repo;

pub use dalkit_core_types::schema;

// Re-export commonly used types
pub use bridge::{DomainBridge, PlayerBridge, TeamBridge};
pub use errors::{DalError, ExError, ExErrorKind, Result};
pub use log_store::RepositorySink;
pub use model::{Player, Position, Team};
pub use records::{LogEntryRecord, PlayerRecord, TeamRecord};
pub use repo::{MemoryRepository, Record, RecordId, Repository};
