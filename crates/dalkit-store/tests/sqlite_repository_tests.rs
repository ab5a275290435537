// The SQLite repository honours the same contract as the in-memory one,
// and the bridges work unchanged on top of it.

use std::sync::Arc;

use dalkit_core::{
    DalError, DomainBridge, LogEntryRecord, Player, PlayerBridge, PlayerRecord, Position,
    Repository, RepositorySink, Team, TeamBridge, TeamRecord,
};
use dalkit_logging::{LogRouter, LogSink, Severity};
use dalkit_store::db::{self, SharedConnection};
use dalkit_store::SqliteRepository;
use tempfile::TempDir;

fn boston() -> TeamRecord {
    TeamRecord {
        id: Some(0),
        city: Some("Boston".to_string()),
        nickname: Some("Red Sox".to_string()),
        abbreviation: Some("BOS".to_string()),
    }
}

fn ortiz() -> PlayerRecord {
    PlayerRecord {
        id: Some(0),
        first_name: Some("David".to_string()),
        last_name: Some("Ortiz".to_string()),
        number: Some(34),
        team_id: Some(0),
        position: Some(Position::DesignatedHitter),
    }
}

fn sqlite_bridges(conn: &SharedConnection) -> (TeamBridge, PlayerBridge) {
    let teams = TeamBridge::new(Arc::new(SqliteRepository::<TeamRecord>::new(conn.clone())));
    let players = PlayerBridge::new(
        Arc::new(SqliteRepository::<PlayerRecord>::new(conn.clone())),
        teams.clone(),
    );
    (teams, players)
}

#[test]
fn test_insert_then_find() {
    let repo = SqliteRepository::<TeamRecord>::new(db::open_shared_in_memory().unwrap());

    assert_eq!(repo.insert(boston()).unwrap(), 0);

    assert_eq!(repo.find_by_id(0).unwrap(), Some(boston()));
    assert_eq!(repo.find_all().unwrap(), vec![boston()]);
    assert_eq!(repo.find_by_id(1).unwrap(), None);
}

#[test]
fn test_incomplete_insert_leaves_table_unchanged() {
    // Given: A repository holding one team
    let repo = SqliteRepository::<TeamRecord>::new(db::open_shared_in_memory().unwrap());
    repo.insert(boston()).unwrap();

    // When: A team without a city is inserted
    let err = repo
        .insert(TeamRecord {
            id: Some(1),
            city: None,
            ..boston()
        })
        .unwrap_err();

    // Then: Validation fails and nothing was written
    assert_eq!(
        err,
        DalError::MissingFields {
            kind: "team",
            fields: vec!["city"],
        }
    );
    assert_eq!(repo.find_all().unwrap(), vec![boston()]);
}

#[test]
fn test_delete_contract() {
    let repo = SqliteRepository::<PlayerRecord>::new(db::open_shared_in_memory().unwrap());
    repo.insert(ortiz()).unwrap();

    assert_eq!(
        repo.delete(&PlayerRecord::default()),
        Err(DalError::MissingId { kind: "player" })
    );
    assert_eq!(
        repo.delete(&PlayerRecord {
            id: Some(9),
            ..PlayerRecord::default()
        }),
        Err(DalError::NotFound {
            kind: "player",
            id: 9
        })
    );

    repo.delete(&ortiz()).unwrap();
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn test_position_round_trips_through_text_column() {
    let repo = SqliteRepository::<PlayerRecord>::new(db::open_shared_in_memory().unwrap());
    for (id, position) in Position::ALL.into_iter().enumerate() {
        repo.insert(PlayerRecord {
            id: Some(id as i64),
            position: Some(position),
            ..ortiz()
        })
        .unwrap();
    }

    let stored: Vec<_> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .filter_map(|p| p.position)
        .collect();

    assert_eq!(stored, Position::ALL.to_vec());
}

#[test]
fn test_unknown_stored_position_is_invalid_value() {
    // Given: A row written outside the repository with an unknown position
    let conn = db::open_shared_in_memory().unwrap();
    conn.lock()
        .unwrap()
        .execute(
            "INSERT INTO players (id, first_name, last_name, number, team_id, position)
             VALUES (1, 'A', 'B', 1, 0, 'Goalie')",
            [],
        )
        .unwrap();
    let repo = SqliteRepository::<PlayerRecord>::new(conn);

    // When / Then: Reading it reports the bad value
    assert_eq!(
        repo.find_by_id(1),
        Err(DalError::InvalidValue {
            field: "position",
            value: "Goalie".to_string(),
        })
    );
}

#[test]
fn test_roster_scenario_over_sqlite() {
    // Given: Team and player bridges sharing one SQLite connection
    let conn = db::open_shared_in_memory().unwrap();
    let (teams, players) = sqlite_bridges(&conn);

    // When: Boston and David Ortiz are saved
    let mut bos = Team::new(Some(0), "Boston", "Red Sox", "BOS");
    teams.save(&mut bos).unwrap();
    let mut david = Player::new(
        Some(0),
        "David",
        "Ortiz",
        34,
        bos.id,
        Position::DesignatedHitter,
    );
    players.save(&mut david).unwrap();

    // Then: Retrieving the player resolves his team
    let player = players.retrieve(0).unwrap().unwrap();
    assert_eq!(player.first_name.as_deref(), Some("David"));
    assert_eq!(player.team().unwrap().city.as_deref(), Some("Boston"));
}

#[test]
fn test_file_database_survives_reopen() {
    // Given: A roster saved to a file database
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.db");
    {
        let (teams, players) = sqlite_bridges(&db::open_shared(&path).unwrap());
        teams.save(&mut Team::new(Some(0), "Boston", "Red Sox", "BOS")).unwrap();
        players
            .save(&mut Player::new(
                Some(0),
                "David",
                "Ortiz",
                34,
                Some(0),
                Position::DesignatedHitter,
            ))
            .unwrap();
    }

    // When: The file is opened again
    let (_, players) = sqlite_bridges(&db::open_shared(&path).unwrap());

    // Then: The player and his team are still there
    let all = players.retrieve_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].team().unwrap().abbreviation.as_deref(), Some("BOS"));
}

#[test]
fn test_repository_sink_persists_to_sqlite() {
    let repo = Arc::new(SqliteRepository::<LogEntryRecord>::new(
        db::open_shared_in_memory().unwrap(),
    ));
    let mut router = LogRouter::new();
    router.register(Severity::Error, Arc::new(RepositorySink::new(repo.clone())));

    router.dispatch(Severity::Error, "disk full");
    router.dispatch(Severity::Debug, "not routed");

    let entries = repo.find_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Some(Severity::Error));
    assert_eq!(entries[0].message.as_deref(), Some("disk full"));
    assert!(entries[0].logged_at.is_some());
}

#[test]
fn test_repository_sink_resumes_on_reopened_file() {
    // Given: A log database holding two entries from an earlier run
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.db");
    {
        let repo = Arc::new(SqliteRepository::<LogEntryRecord>::new(
            db::open_shared(&path).unwrap(),
        ));
        let sink = RepositorySink::new(repo);
        sink.write(Severity::Info, "a").unwrap();
        sink.write(Severity::Info, "b").unwrap();
    }

    // When: The file is reopened and new messages are routed
    let repo = Arc::new(SqliteRepository::<LogEntryRecord>::new(
        db::open_shared(&path).unwrap(),
    ));
    let mut router = LogRouter::new();
    router.register_all(Arc::new(RepositorySink::resume(repo.clone()).unwrap()));
    router.register(
        Severity::Warn,
        Arc::new(RepositorySink::new(repo.clone()).with_id("fresh")),
    );
    let outcome = router.dispatch(Severity::Warn, "c");

    // Then: Both sinks stored the message under fresh ids
    assert_eq!(outcome.failed(), 0);
    let ids: Vec<_> = repo.find_all().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![Some(0), Some(1), Some(2), Some(3)]);
}
