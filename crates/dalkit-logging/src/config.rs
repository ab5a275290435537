//! Startup configuration for the router
//!
//! A router is usually configured once when the application starts and then
//! used for the rest of its lifetime. [`RouterConfig`] describes which sink
//! ids go under which severities; a [`SinkCatalog`] supplies the sink
//! instances those ids refer to.
//!
//! ```toml
//! all = ["dalkit.sink.console"]
//!
//! [levels]
//! error = ["dalkit.sink.memory"]
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::router::LogRouter;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, DiscardSink, LogSink};

/// Declarative severity to sink-id mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Sink ids registered for every severity
    #[serde(default)]
    pub all: Vec<String>,

    /// Additional sink ids per severity
    ///
    /// Keys are matched case-insensitively; two keys naming the same
    /// severity are rejected.
    #[serde(default, deserialize_with = "severity_keys")]
    pub levels: BTreeMap<Severity, Vec<String>>,
}

fn severity_keys<'de, D>(deserializer: D) -> Result<BTreeMap<Severity, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
    let mut levels = BTreeMap::new();
    for (key, sink_ids) in raw {
        let severity: Severity = key.parse().map_err(<D::Error as de::Error>::custom)?;
        if levels.insert(severity, sink_ids).is_some() {
            return Err(<D::Error as de::Error>::custom(format!(
                "severity {} is listed more than once",
                severity
            )));
        }
    }
    Ok(levels)
}

impl RouterConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys or
    /// unknown severity names.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Sinks available to a [`RouterConfig`], keyed by sink id
#[derive(Default)]
pub struct SinkCatalog {
    sinks: HashMap<String, Arc<dyn LogSink>>,
}

impl SinkCatalog {
    pub fn new() -> Self {
        Self {
            sinks: HashMap::new(),
        }
    }

    /// Catalog holding the discard and console sinks
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Arc::new(DiscardSink::new()));
        catalog.insert(Arc::new(ConsoleSink::new()));
        catalog
    }

    /// Make `sink` available under its id, replacing any previous entry
    pub fn insert(&mut self, sink: Arc<dyn LogSink>) {
        self.sinks.insert(sink.id().to_string(), sink);
    }

    pub fn get(&self, sink_id: &str) -> Option<Arc<dyn LogSink>> {
        self.sinks.get(sink_id).cloned()
    }

    fn resolve(
        &self,
        sink_id: &str,
        severity: Option<Severity>,
    ) -> Result<Arc<dyn LogSink>, ConfigError> {
        self.get(sink_id).ok_or_else(|| ConfigError::UnknownSink {
            sink_id: sink_id.to_string(),
            severity,
        })
    }
}

impl LogRouter {
    /// Build a router from `config`, taking sink instances from `catalog`
    ///
    /// Sinks listed under `all` are registered first, then the per-severity
    /// lists in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownSink`] if the configuration names a sink
    /// id the catalog does not contain.
    pub fn from_config(config: &RouterConfig, catalog: &SinkCatalog) -> Result<Self, ConfigError> {
        let mut router = LogRouter::new();
        for sink_id in &config.all {
            router.register_all(catalog.resolve(sink_id, None)?);
        }
        for (severity, sink_ids) in &config.levels {
            for sink_id in sink_ids {
                router.register(*severity, catalog.resolve(sink_id, Some(*severity))?);
            }
        }
        Ok(router)
    }
}
