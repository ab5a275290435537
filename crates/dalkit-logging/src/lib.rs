//! dalkit logging - multi-level, multi-sink log dispatch
//!
//! A [`LogRouter`] maps each [`Severity`] to an ordered list of sinks and
//! hands every dispatched message to all sinks registered for its severity.
//! Sinks are pluggable through the [`LogSink`] capability:
//!
//! - [`DiscardSink`] drops every message
//! - [`ConsoleSink`] prints `MM/DD/YYYY HH:MM <Level> - <message>`
//! - [`MemorySink`] keeps messages in memory
//!
//! Routers are plain values. Build one at startup (directly, or from a
//! [`RouterConfig`]) and pass it to whatever needs to log.
//!
//! ```
//! use std::sync::Arc;
//! use dalkit_logging::{LogRouter, MemorySink, Severity};
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut router = LogRouter::new();
//! router.register(Severity::Error, sink.clone());
//! router.dispatch(Severity::Error, "disk full");
//! assert_eq!(sink.entries(), vec![(Severity::Error, "disk full".to_string())]);
//! ```

pub mod config;
pub mod errors;
pub mod router;
pub mod severity;
pub mod sink;

pub use config::{RouterConfig, SinkCatalog};
pub use errors::{ConfigError, SinkError};
pub use router::{Dispatch, LogRouter};
pub use severity::Severity;
pub use sink::{format_line, ConsoleSink, DiscardSink, LogSink, MemorySink};
