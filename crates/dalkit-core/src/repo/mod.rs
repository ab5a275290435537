//! Record and repository contracts
//!
//! A [`Record`] is the flat, storage-shaped form of an entity: every field
//! is optional until it is validated. A [`Repository`] stores one record type
//! behind a backing sequence that can be swapped without touching the domain
//! or bridge code. [`MemoryRepository`] is the in-memory backing; the
//! `dalkit-store` crate provides a SQLite one.

pub mod memory;

pub use memory::MemoryRepository;

use crate::errors::{DalError, Result};

/// Identifier of a stored record, assigned by the caller
pub type RecordId = i64;

/// Flat storage row for one entity
pub trait Record: Clone + Send + Sync + 'static {
    /// Short lowercase name used in errors and diagnostics
    const KIND: &'static str;

    fn id(&self) -> Option<RecordId>;

    /// Names of required fields that are absent, in declaration order
    fn missing_fields(&self) -> Vec<&'static str>;
}

/// Check that every required field of `record` is present
///
/// # Errors
///
/// Returns [`DalError::MissingFields`] naming every absent required field.
pub fn validate<T: Record>(record: &T) -> Result<RecordId> {
    let missing = record.missing_fields();
    match record.id() {
        Some(id) if missing.is_empty() => Ok(id),
        _ => Err(DalError::MissingFields {
            kind: T::KIND,
            fields: missing,
        }),
    }
}

/// Id of a record handed to `delete`
///
/// # Errors
///
/// Returns [`DalError::MissingId`] when the record has no id.
pub fn require_id<T: Record>(record: &T) -> Result<RecordId> {
    record.id().ok_or(DalError::MissingId { kind: T::KIND })
}

/// CRUD contract over one record type
///
/// Implementations keep records unique by id and in insertion order, and
/// validate input before mutating anything.
pub trait Repository<T: Record>: Send + Sync {
    /// Store `record` and return its id
    ///
    /// # Errors
    ///
    /// - [`DalError::MissingFields`] if a required field is absent
    /// - [`DalError::DuplicateId`] if a stored record already has the id
    /// - [`DalError::Persistence`] if the backing store fails
    fn insert(&self, record: T) -> Result<RecordId>;

    /// Remove the stored record with the same id as `record`
    ///
    /// # Errors
    ///
    /// - [`DalError::MissingId`] if `record` has no id
    /// - [`DalError::NotFound`] if no stored record has that id
    /// - [`DalError::Persistence`] if the backing store fails
    fn delete(&self, record: &T) -> Result<()>;

    /// Current contents in insertion order
    ///
    /// # Errors
    ///
    /// Returns [`DalError::Persistence`] if the backing store fails.
    fn find_all(&self) -> Result<Vec<T>>;

    /// The stored record with `id`, or `None`
    ///
    /// # Errors
    ///
    /// Returns [`DalError::Persistence`] if the backing store fails.
    fn find_by_id(&self, id: RecordId) -> Result<Option<T>>;
}
