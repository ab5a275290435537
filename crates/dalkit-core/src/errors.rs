use thiserror::Error;

use crate::repo::RecordId;

/// Result type alias using DalError
pub type Result<T> = std::result::Result<T, DalError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests and structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A required field is absent
    Validation,
    NotFound,
    AlreadyExists,
    /// A stored value cannot be mapped back into its field type
    InvalidValue,
    Persistence,
    SinkFailure,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::InvalidValue => "ERR_INVALID_VALUE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::SinkFailure => "ERR_SINK_FAILURE",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable classification plus free-form context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    record_kind: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            record_kind: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add record kind context
    pub fn with_record_kind(mut self, kind: impl Into<String>) -> Self {
        self.record_kind = Some(kind.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn record_kind(&self) -> Option<&str> {
        self.record_kind.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(kind) = &self.record_kind {
            write!(f, " (record_kind: {})", kind)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised by repositories and bridges
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DalError {
    /// Insert input lacks required fields
    #[error("{kind} record is missing required fields: {}", .fields.join(", "))]
    MissingFields {
        kind: &'static str,
        fields: Vec<&'static str>,
    },

    /// Delete input has no id
    #[error("{kind} record has no id")]
    MissingId { kind: &'static str },

    /// No stored record has the id
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },

    /// A stored record already uses the id
    #[error("{kind} already exists: {id}")]
    DuplicateId { kind: &'static str, id: RecordId },

    /// A stored value cannot be decoded into its field type
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// The backing store failed
    #[error("persistence failure: {message}")]
    Persistence { message: String },
}

impl DalError {
    /// True for the two caller-recoverable validation failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DalError::MissingFields { .. } | DalError::MissingId { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DalError::NotFound { .. })
    }
}

impl From<DalError> for ExError {
    fn from(err: DalError) -> Self {
        let message = err.to_string();
        match err {
            DalError::MissingFields { kind, .. } => ExError::new(ExErrorKind::Validation)
                .with_op("insert")
                .with_record_kind(kind)
                .with_message(message),

            DalError::MissingId { kind } => ExError::new(ExErrorKind::Validation)
                .with_op("delete")
                .with_record_kind(kind)
                .with_message(message),

            DalError::NotFound { kind, id } => ExError::new(ExErrorKind::NotFound)
                .with_record_kind(kind)
                .with_entity_id(id.to_string())
                .with_message(message),

            DalError::DuplicateId { kind, id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("insert")
                .with_record_kind(kind)
                .with_entity_id(id.to_string())
                .with_message(message),

            DalError::InvalidValue { .. } => {
                ExError::new(ExErrorKind::InvalidValue).with_message(message)
            }

            DalError::Persistence { .. } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }
        }
    }
}

impl From<dalkit_logging::SinkError> for ExError {
    fn from(err: dalkit_logging::SinkError) -> Self {
        ExError::new(ExErrorKind::SinkFailure)
            .with_op("write")
            .with_message(err.to_string())
    }
}

impl From<dalkit_logging::ConfigError> for ExError {
    fn from(err: dalkit_logging::ConfigError) -> Self {
        ExError::new(ExErrorKind::Config)
            .with_op("configure_router")
            .with_message(err.to_string())
    }
}
