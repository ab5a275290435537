//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Router fields
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_SINK_ID: &str = "sink_id";

// Repository fields
pub const FIELD_RECORD_KIND: &str = "record_kind";
pub const FIELD_RECORD_ID: &str = "record_id";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_UNROUTED: &str = "unrouted";
pub const EVENT_SINK_FAILED: &str = "sink_failed";
