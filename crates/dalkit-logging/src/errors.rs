//! Error types for the logging router
//!
//! Sink failures never leave [`crate::LogRouter::dispatch`]; they are
//! returned by [`crate::LogSink::write`] so the router can isolate them.
//! Configuration errors surface from router construction at startup.

use std::path::PathBuf;

use thiserror::Error;

use crate::severity::Severity;

/// Failure of a single sink while writing one message
#[derive(Error, Debug)]
pub enum SinkError {
    /// The sink's output target failed
    #[error("sink i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The sink refused the message
    #[error("sink rejected message: {reason}")]
    Rejected { reason: String },

    /// The sink's backing resource cannot be used any more
    #[error("sink {sink_id} is unavailable")]
    Unavailable { sink_id: String },
}

/// Failure while building a router from configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for [`crate::RouterConfig`]
    #[error("invalid router configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("cannot read router configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration names a sink the catalog does not provide
    #[error("unknown sink '{sink_id}' in router configuration")]
    UnknownSink {
        sink_id: String,
        severity: Option<Severity>,
    },
}
