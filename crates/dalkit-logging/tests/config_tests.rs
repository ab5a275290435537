#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::sync::Arc;

use dalkit_logging::{ConfigError, LogRouter, MemorySink, RouterConfig, Severity, SinkCatalog};

#[test]
fn test_router_from_config_registers_all_then_levels() {
    let config = RouterConfig::from_toml_str(
        r#"
        all = ["dalkit.sink.discard"]

        [levels]
        error = ["dalkit.sink.memory"]
        "#,
    )
    .unwrap();
    let memory = Arc::new(MemorySink::new());
    let mut catalog = SinkCatalog::with_defaults();
    catalog.insert(memory.clone());

    let router = LogRouter::from_config(&config, &catalog).unwrap();

    assert_eq!(
        router.sinks(Severity::Error),
        vec!["dalkit.sink.discard", "dalkit.sink.memory"]
    );
    assert_eq!(router.sinks(Severity::Info), vec!["dalkit.sink.discard"]);

    router.dispatch(Severity::Error, "configured");
    router.dispatch(Severity::Info, "discarded");
    assert_eq!(
        memory.entries(),
        vec![(Severity::Error, "configured".to_string())]
    );
}

#[test]
fn test_unknown_sink_is_reported() {
    let config = RouterConfig::from_toml_str("[levels]\nwarn = [\"acme.sink.pager\"]\n").unwrap();

    let err = LogRouter::from_config(&config, &SinkCatalog::with_defaults()).unwrap_err();

    match err {
        ConfigError::UnknownSink { sink_id, severity } => {
            assert_eq!(sink_id, "acme.sink.pager");
            assert_eq!(severity, Some(Severity::Warn));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "all = [\"dalkit.sink.console\"]").unwrap();

    let config = RouterConfig::load(file.path()).unwrap();

    assert_eq!(config.all, vec!["dalkit.sink.console".to_string()]);
    assert!(config.levels.is_empty());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouterConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let err = RouterConfig::from_toml_str("sinks = []\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
