//! dalkit CLI
//!
//! Walkthroughs of the log router and the roster data access layer

use clap::{Parser, Subcommand};
use dalkit_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dalkit")]
#[command(about = "dalkit - log routing and data access walkthroughs", long_about = None)]
struct Cli {
    /// Diagnostics profile (development or production); output goes to stderr
    #[arg(long, global = true, default_value = "development")]
    profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Route messages through a configured log router
    Logging(commands::logging::LoggingArgs),
    /// Save and retrieve a team and player through the bridges
    Roster(commands::roster::RosterArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.profile);

    let result = match cli.command {
        Commands::Logging(args) => commands::logging::execute(args),
        Commands::Roster(args) => commands::roster::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
