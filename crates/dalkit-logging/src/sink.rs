//! Sink capability and the built-in sinks

use std::io::Write;
use std::sync::Mutex;

use chrono::{Local, NaiveDateTime};

use crate::errors::SinkError;
use crate::severity::Severity;

/// Timestamp layout used by [`ConsoleSink`]
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

/// A destination for routed log messages
///
/// Implementors are free to print, persist or forward messages. Identity is
/// the [`LogSink::id`] string: two sinks with the same id are the same sink
/// as far as the router is concerned.
pub trait LogSink: Send + Sync {
    /// Stable identity, conventionally in reverse-DNS form
    fn id(&self) -> &str;

    /// Consume one message
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the message could not be written. The
    /// router isolates the failure from the other sinks.
    fn write(&self, severity: Severity, message: &str) -> Result<(), SinkError>;
}

/// Render one console line
pub fn format_line(at: NaiveDateTime, severity: Severity, message: &str) -> String {
    format!("{} {} - {}", at.format(TIMESTAMP_FORMAT), severity, message)
}

/// Sink that drops every message
#[derive(Debug, Clone)]
pub struct DiscardSink {
    id: String,
}

impl DiscardSink {
    pub const ID: &'static str = "dalkit.sink.discard";

    pub fn new() -> Self {
        Self {
            id: Self::ID.to_string(),
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for DiscardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for DiscardSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, _severity: Severity, _message: &str) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Sink that writes timestamped lines to the console
///
/// Writes to stdout by default; [`ConsoleSink::with_writer`] redirects the
/// output to any `Write` target.
pub struct ConsoleSink {
    id: String,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub const ID: &'static str = "dalkit.sink.console";

    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            id: Self::ID.to_string(),
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Replace the sink identity
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").field("id", &self.id).finish()
    }
}

impl LogSink for ConsoleSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        let line = format_line(Local::now().naive_local(), severity, message);
        let mut out = self.out.lock().map_err(|_| SinkError::Unavailable {
            sink_id: self.id.clone(),
        })?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

/// Sink that keeps every message in memory
#[derive(Debug)]
pub struct MemorySink {
    id: String,
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub const ID: &'static str = "dalkit.sink.memory";

    pub fn new() -> Self {
        Self::with_id(Self::ID)
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Messages received so far, in arrival order
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().map(|mut e| e.clear()).ok();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        let mut entries = self.entries.lock().map_err(|_| SinkError::Unavailable {
            sink_id: self.id.clone(),
        })?;
        entries.push((severity, message.to_string()));
        Ok(())
    }
}
