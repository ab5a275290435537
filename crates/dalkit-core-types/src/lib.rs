//! Core types shared across dalkit facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! router, the repository layer and the tracing facility so that every
//! crate emits the same field keys and event names.

pub mod schema;
