//! Bridge layer between domain objects and storage records
//!
//! ## Logging Ownership
//!
//! Bridges own lifecycle logging for persistence operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Repositories below them use only `tracing::debug!()`.

pub mod player;
pub mod team;

pub use player::PlayerBridge;
pub use team::TeamBridge;

use std::time::Instant;

use crate::errors::Result;
use crate::repo::{Record, RecordId, Repository};
use crate::{log_op_end, log_op_error, log_op_start};

/// Translation and persistence delegation for one domain type
///
/// Implementors supply the conversions and the repository; `save`,
/// `delete`, `retrieve` and `retrieve_all` are provided.
pub trait DomainBridge {
    type Domain;
    type Record: Record;

    /// Backing repository for this bridge's records
    fn repository(&self) -> &dyn Repository<Self::Record>;

    /// Flatten `domain` into its storage record; derived fields are dropped
    fn to_record(&self, domain: &Self::Domain) -> Self::Record;

    /// Build the domain object for `record`, resolving related entities
    ///
    /// # Errors
    ///
    /// Propagates repository failures from related-entity lookups.
    fn to_domain(&self, record: Self::Record) -> Result<Self::Domain>;

    /// Write a store-confirmed id back onto `domain`
    fn assign_id(domain: &mut Self::Domain, id: RecordId);

    /// Refresh derived references on `domain` after it was saved
    ///
    /// # Errors
    ///
    /// Propagates repository failures from related-entity lookups.
    fn resolve_related(&self, _domain: &mut Self::Domain) -> Result<()> {
        Ok(())
    }

    /// Insert `domain`, write the returned id back onto it and resolve its
    /// related entities
    ///
    /// # Errors
    ///
    /// Propagates validation, duplicate-id and persistence errors from the
    /// repository insert; `domain` is untouched on those failures. A failed
    /// related-entity lookup is reported after the record was stored.
    fn save(&self, domain: &mut Self::Domain) -> Result<()> {
        let op = format!("{}_save", <Self::Record as Record>::KIND);
        log_op_start!(op.as_str());
        let start = Instant::now();

        let id = self
            .repository()
            .insert(self.to_record(domain))
            .and_then(|id| {
                Self::assign_id(domain, id);
                self.resolve_related(domain)?;
                Ok(id)
            })
            .map_err(|e| {
                log_op_error!(
                    op.as_str(),
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            op.as_str(),
            duration_ms = start.elapsed().as_millis() as u64,
            record_id = id
        );
        Ok(())
    }

    /// Remove the stored record matching `domain`
    ///
    /// # Errors
    ///
    /// Propagates missing-id, not-found and persistence errors from the
    /// repository delete.
    fn delete(&self, domain: &Self::Domain) -> Result<()> {
        let op = format!("{}_delete", <Self::Record as Record>::KIND);
        log_op_start!(op.as_str());
        let start = Instant::now();

        self.repository()
            .delete(&self.to_record(domain))
            .map_err(|e| {
                log_op_error!(
                    op.as_str(),
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(op.as_str(), duration_ms = start.elapsed().as_millis() as u64);
        Ok(())
    }

    /// Look up `id` and convert the record, or `None` if absent
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from this or any related lookup.
    fn retrieve(&self, id: RecordId) -> Result<Option<Self::Domain>> {
        let op = format!("{}_retrieve", <Self::Record as Record>::KIND);
        log_op_start!(op.as_str(), record_id = id);
        let start = Instant::now();

        let result = self
            .repository()
            .find_by_id(id)
            .and_then(|found| found.map(|record| self.to_domain(record)).transpose());

        match result {
            Ok(domain) => {
                log_op_end!(
                    op.as_str(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    found = domain.is_some()
                );
                Ok(domain)
            }
            Err(e) => {
                log_op_error!(
                    op.as_str(),
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(e)
            }
        }
    }

    /// Every stored record converted, in insertion order
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from this or any related lookup.
    fn retrieve_all(&self) -> Result<Vec<Self::Domain>> {
        self.repository()
            .find_all()?
            .into_iter()
            .map(|record| self.to_domain(record))
            .collect()
    }
}
