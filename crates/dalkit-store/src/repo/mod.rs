//! SQLite repositories
//!
//! [`SqliteRepository`] implements the same contract as the in-memory
//! repository over one table per record type. [`SqlRecord`] describes how a
//! record maps onto its table.

mod records;
mod sqlite_repo;

pub use records::SqlRecord;
pub use sqlite_repo::SqliteRepository;
