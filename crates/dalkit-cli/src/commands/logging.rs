//! Logging command
//!
//! Usage: dalkit logging [--config <FILE>] [--level <LEVEL> --message <TEXT>]

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use dalkit_logging::{
    ConsoleSink, Dispatch, LogRouter, MemorySink, RouterConfig, Severity, SinkCatalog,
};

#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// Router configuration (TOML); defaults to the console sink on every level
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Severity of a single message to dispatch instead of the walkthrough
    #[arg(short, long, requires = "message")]
    pub level: Option<Severity>,

    /// Text of the single message
    #[arg(short, long, requires = "level")]
    pub message: Option<String>,
}

/// Execute logging command
pub fn execute(args: LoggingArgs) -> Result<(), Box<dyn std::error::Error>> {
    let router = match &args.config {
        Some(path) => {
            let config = RouterConfig::load(path)?;
            let mut catalog = SinkCatalog::with_defaults();
            catalog.insert(Arc::new(MemorySink::new()));
            LogRouter::from_config(&config, &catalog)?
        }
        None => {
            let mut router = LogRouter::new();
            router.register_all(Arc::new(ConsoleSink::new()));
            router
        }
    };
    tracing::debug!(router = ?router, "router configured");

    let messages = match (args.level, args.message) {
        (Some(level), Some(message)) => vec![(level, message)],
        _ => vec![
            (Severity::Debug, "First debug message".to_string()),
            (Severity::Error, "First error message".to_string()),
        ],
    };

    for (severity, message) in messages {
        if router.dispatch(severity, &message) == Dispatch::Unrouted {
            println!("No sink configured for {}", severity);
        }
    }

    Ok(())
}
