//! Roster command
//!
//! Usage: dalkit roster [--backend memory|sqlite] [--db <FILE>] [--json]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use dalkit_core::{
    DomainBridge, Player, PlayerBridge, PlayerRecord, Position, Team, TeamBridge, TeamRecord,
};
use dalkit_store::{db, SqliteRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Memory,
    Sqlite,
}

#[derive(Debug, Args)]
pub struct RosterArgs {
    /// Backing store for both repositories
    #[arg(short, long, value_enum, default_value_t = Backend::Memory)]
    pub backend: Backend,

    /// SQLite database file (default: in-memory); sqlite backend only
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Print the retrieved player as JSON
    #[arg(long)]
    pub json: bool,
}

const BOSTON_ID: i64 = 0;
const ORTIZ_ID: i64 = 0;

/// Execute roster command
pub fn execute(args: RosterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (teams, players) = bridges(&args)?;

    // A file database may already hold the roster from an earlier run
    if teams.retrieve(BOSTON_ID)?.is_none() {
        teams.save(&mut Team::new(Some(BOSTON_ID), "Boston", "Red Sox", "BOS"))?;
    }
    if players.retrieve(ORTIZ_ID)?.is_none() {
        players.save(&mut Player::new(
            Some(ORTIZ_ID),
            "David",
            "Ortiz",
            34,
            Some(BOSTON_ID),
            Position::DesignatedHitter,
        ))?;
    }

    let player = players
        .retrieve(ORTIZ_ID)?
        .ok_or("player was saved but cannot be retrieved")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&player)?);
        return Ok(());
    }

    let city = player
        .team()
        .and_then(|team| team.city.as_deref())
        .unwrap_or("no team");
    println!("{} plays for {}", player.full_name(), city);

    Ok(())
}

fn bridges(args: &RosterArgs) -> Result<(TeamBridge, PlayerBridge), Box<dyn std::error::Error>> {
    match args.backend {
        Backend::Memory => {
            if args.db.is_some() {
                return Err("--db requires --backend sqlite".into());
            }
            let teams = TeamBridge::in_memory();
            let players = PlayerBridge::in_memory(teams.clone());
            Ok((teams, players))
        }
        Backend::Sqlite => {
            let conn = match &args.db {
                Some(path) => db::open_shared(path)?,
                None => db::open_shared_in_memory()?,
            };
            let teams = TeamBridge::new(Arc::new(SqliteRepository::<TeamRecord>::new(
                conn.clone(),
            )));
            let players = PlayerBridge::new(
                Arc::new(SqliteRepository::<PlayerRecord>::new(conn)),
                teams.clone(),
            );
            Ok((teams, players))
        }
    }
}
