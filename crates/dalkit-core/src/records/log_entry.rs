use chrono::{DateTime, Utc};
use dalkit_logging::Severity;
use serde::{Deserialize, Serialize};

use crate::repo::{Record, RecordId};

/// Storage row for one message persisted by [`crate::log_store::RepositorySink`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryRecord {
    pub id: Option<RecordId>,
    pub severity: Option<Severity>,
    pub message: Option<String>,
    pub logged_at: Option<DateTime<Utc>>,
}

impl Record for LogEntryRecord {
    const KIND: &'static str = "log_entry";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        super::absent(&[
            ("id", self.id.is_some()),
            ("severity", self.severity.is_some()),
            ("message", self.message.is_some()),
            ("logged_at", self.logged_at.is_some()),
        ])
    }
}
