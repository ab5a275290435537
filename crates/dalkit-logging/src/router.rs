//! Severity to sink routing

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use dalkit_core_types::schema::{EVENT_SINK_FAILED, EVENT_UNROUTED};

use crate::severity::Severity;
use crate::sink::LogSink;

/// Outcome of a single [`LogRouter::dispatch`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No sink is registered for the severity; nothing was invoked
    Unrouted,
    /// Every registered sink was invoked once
    Delivered { delivered: usize, failed: usize },
}

impl Dispatch {
    /// Number of sinks that accepted the message
    pub fn delivered(&self) -> usize {
        match self {
            Dispatch::Unrouted => 0,
            Dispatch::Delivered { delivered, .. } => *delivered,
        }
    }

    /// Number of sinks that failed while writing the message
    pub fn failed(&self) -> usize {
        match self {
            Dispatch::Unrouted => 0,
            Dispatch::Delivered { failed, .. } => *failed,
        }
    }
}

/// Registry mapping each severity to an ordered list of sinks
///
/// Registration order is dispatch order. A sink is identified by its
/// [`LogSink::id`], so registering the same id twice under one severity is a
/// no-op.
#[derive(Default)]
pub struct LogRouter {
    sinks: HashMap<Severity, Vec<Arc<dyn LogSink>>>,
}

impl LogRouter {
    /// Create a router with no sinks
    pub fn new() -> Self {
        Self {
            sinks: HashMap::new(),
        }
    }

    /// Add `sink` to `severity` unless a sink with the same id is present
    ///
    /// Returns `true` when the sink was added.
    pub fn register(&mut self, severity: Severity, sink: Arc<dyn LogSink>) -> bool {
        let sinks = self.sinks.entry(severity).or_default();
        if sinks.iter().any(|s| s.id() == sink.id()) {
            return false;
        }
        tracing::debug!(
            component = module_path!(),
            op = "register",
            severity = %severity,
            sink_id = sink.id(),
        );
        sinks.push(sink);
        true
    }

    /// Register `sink` for every severity
    pub fn register_all(&mut self, sink: Arc<dyn LogSink>) {
        for severity in Severity::ALL {
            self.register(severity, Arc::clone(&sink));
        }
    }

    /// Remove the sink with `sink_id` from `severity`
    ///
    /// Returns `true` when a sink was removed; an absent sink is not an error.
    pub fn deregister(&mut self, severity: Severity, sink_id: &str) -> bool {
        let Some(sinks) = self.sinks.get_mut(&severity) else {
            return false;
        };
        let Some(index) = sinks.iter().position(|s| s.id() == sink_id) else {
            return false;
        };
        sinks.remove(index);
        tracing::debug!(
            component = module_path!(),
            op = "deregister",
            severity = %severity,
            sink_id = sink_id,
        );
        true
    }

    /// Remove the sink with `sink_id` from every severity
    pub fn deregister_all(&mut self, sink_id: &str) {
        for severity in Severity::ALL {
            self.deregister(severity, sink_id);
        }
    }

    /// Whether at least one sink is registered for `severity`
    pub fn has_sink(&self, severity: Severity) -> bool {
        self.sinks
            .get(&severity)
            .is_some_and(|sinks| !sinks.is_empty())
    }

    /// Ids of the sinks registered for `severity`, in dispatch order
    pub fn sinks(&self, severity: Severity) -> Vec<&str> {
        self.sinks
            .get(&severity)
            .map(|sinks| sinks.iter().map(|s| s.id()).collect())
            .unwrap_or_default()
    }

    /// Hand `message` to every sink registered for `severity`
    ///
    /// Sinks run in registration order. A sink that returns an error or
    /// panics is reported through `tracing` and skipped; the remaining sinks
    /// still receive the message. With no sinks registered this only emits a
    /// diagnostic.
    pub fn dispatch(&self, severity: Severity, message: &str) -> Dispatch {
        let sinks = match self.sinks.get(&severity) {
            Some(sinks) if !sinks.is_empty() => sinks,
            _ => {
                tracing::warn!(
                    component = module_path!(),
                    op = "dispatch",
                    event = EVENT_UNROUTED,
                    severity = %severity,
                    "no sink configured"
                );
                return Dispatch::Unrouted;
            }
        };

        let mut delivered = 0;
        let mut failed = 0;
        for sink in sinks {
            match catch_unwind(AssertUnwindSafe(|| sink.write(severity, message))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(err)) => {
                    failed += 1;
                    tracing::warn!(
                        component = module_path!(),
                        op = "dispatch",
                        event = EVENT_SINK_FAILED,
                        severity = %severity,
                        sink_id = sink.id(),
                        error = %err,
                    );
                }
                Err(panic) => {
                    failed += 1;
                    tracing::warn!(
                        component = module_path!(),
                        op = "dispatch",
                        event = EVENT_SINK_FAILED,
                        severity = %severity,
                        sink_id = sink.id(),
                        error = panic_message(panic.as_ref()),
                    );
                }
            }
        }

        Dispatch::Delivered { delivered, failed }
    }
}

impl std::fmt::Debug for LogRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for severity in Severity::ALL {
            if let Some(sinks) = self.sinks.get(&severity) {
                map.entry(&severity, &sinks.iter().map(|s| s.id()).collect::<Vec<_>>());
            }
        }
        map.finish()
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "sink panicked"
    }
}
