//! Log sink that persists messages through a repository

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dalkit_logging::{LogSink, Severity, SinkError};

use crate::errors::DalError;
use crate::records::LogEntryRecord;
use crate::repo::{RecordId, Repository};

/// Sink storing each message as a [`LogEntryRecord`]
///
/// Entry ids are assigned by the sink, counting up from zero, from the id
/// given to [`RepositorySink::starting_at`], or from just past the stored
/// entries for [`RepositorySink::resume`]. An id that is already taken is
/// skipped, so a sink over a store with existing entries never drops a
/// message for an id collision.
pub struct RepositorySink {
    id: String,
    repo: Arc<dyn Repository<LogEntryRecord>>,
    next_id: AtomicI64,
}

impl RepositorySink {
    pub const ID: &'static str = "dalkit.sink.repository";

    pub fn new(repo: Arc<dyn Repository<LogEntryRecord>>) -> Self {
        Self {
            id: Self::ID.to_string(),
            repo,
            next_id: AtomicI64::new(0),
        }
    }

    /// Sink continuing after the highest id already stored in `repo`
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from reading the stored entries.
    pub fn resume(repo: Arc<dyn Repository<LogEntryRecord>>) -> crate::errors::Result<Self> {
        let next = repo
            .find_all()?
            .iter()
            .filter_map(|entry| entry.id)
            .max()
            .map_or(0, |id| id + 1);
        Ok(Self::new(repo).starting_at(next))
    }

    /// Continue numbering from `first_id`
    pub fn starting_at(self, first_id: RecordId) -> Self {
        self.next_id.store(first_id, Ordering::SeqCst);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl LogSink for RepositorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        let logged_at = Utc::now();
        loop {
            let entry = LogEntryRecord {
                id: Some(self.next_id.fetch_add(1, Ordering::SeqCst)),
                severity: Some(severity),
                message: Some(message.to_string()),
                logged_at: Some(logged_at),
            };
            match self.repo.insert(entry) {
                Ok(_) => return Ok(()),
                // Another writer holds this id; take the next one
                Err(DalError::DuplicateId { .. }) => continue,
                Err(err) => {
                    return Err(SinkError::Rejected {
                        reason: err.to_string(),
                    })
                }
            }
        }
    }
}
