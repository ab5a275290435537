use dalkit_core::{DomainBridge, PlayerBridge, PlayerRecord, Position, Team, TeamBridge, TeamRecord};
use proptest::prelude::*;

/// Team and player bridges over fresh in-memory repositories
#[allow(dead_code)]
pub fn new_bridges() -> (TeamBridge, PlayerBridge) {
    let teams = TeamBridge::in_memory();
    let players = PlayerBridge::in_memory(teams.clone());
    (teams, players)
}

/// Bridges with the Boston Red Sox saved under id 0
#[allow(dead_code)]
pub fn boston_bridges() -> (TeamBridge, PlayerBridge) {
    let (teams, players) = new_bridges();
    teams
        .save(&mut Team::new(Some(0), "Boston", "Red Sox", "BOS"))
        .unwrap();
    (teams, players)
}

#[allow(dead_code)]
pub fn team_record(id: i64) -> TeamRecord {
    TeamRecord {
        id: Some(id),
        city: Some(format!("City {id}")),
        nickname: Some(format!("Nick {id}")),
        abbreviation: Some(format!("T{id}")),
    }
}

#[allow(dead_code)]
pub fn position_strategy() -> impl Strategy<Value = Position> {
    proptest::sample::select(Position::ALL.to_vec())
}

/// Complete player records
#[allow(dead_code)]
pub fn player_record_strategy() -> impl Strategy<Value = PlayerRecord> {
    (
        any::<i64>(),
        "[A-Z][a-z]{1,10}",
        "[A-Z][a-z]{1,12}",
        0u32..100,
        0i64..4,
        position_strategy(),
    )
        .prop_map(|(id, first, last, number, team_id, position)| PlayerRecord {
            id: Some(id),
            first_name: Some(first),
            last_name: Some(last),
            number: Some(number),
            team_id: Some(team_id),
            position: Some(position),
        })
}
