#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{boston_bridges, new_bridges, player_record_strategy};
use dalkit_core::{DalError, DomainBridge, Player, Position, Team};
use proptest::prelude::*;

#[test]
fn test_roster_scenario() {
    let (teams, players) = new_bridges();

    let mut bos = Team::new(Some(0), "Boston", "Red Sox", "BOS");
    teams.save(&mut bos).unwrap();
    assert_eq!(bos.id, Some(0));

    let mut ortiz = Player::new(
        Some(0),
        "David",
        "Ortiz",
        34,
        bos.id,
        Position::DesignatedHitter,
    );
    players.save(&mut ortiz).unwrap();

    let team = teams.retrieve(0).unwrap().unwrap();
    assert_eq!(team.city.as_deref(), Some("Boston"));

    let player = players.retrieve(0).unwrap().unwrap();
    assert_eq!(player.full_name(), "David Ortiz");
    assert_eq!(player.team().unwrap().city.as_deref(), Some("Boston"));
}

#[test]
fn test_delete_propagates_not_found() {
    let (teams, _) = new_bridges();
    let ghost = Team::new(Some(5), "Nowhere", "Ghosts", "GHO");

    let err = teams.delete(&ghost).unwrap_err();

    assert_eq!(err, DalError::NotFound { kind: "team", id: 5 });
}

#[test]
fn test_delete_without_id_is_validation_error() {
    let (_, players) = boston_bridges();
    let nameless = Player::new(None, "No", "Id", 1, Some(0), Position::Pitcher);

    let err = players.delete(&nameless).unwrap_err();

    assert_eq!(err, DalError::MissingId { kind: "player" });
}

#[test]
fn test_save_duplicate_player_id_rejected() {
    let (_, players) = boston_bridges();
    let mut first = Player::new(Some(1), "A", "One", 1, Some(0), Position::Pitcher);
    let mut second = Player::new(Some(1), "B", "Two", 2, Some(0), Position::Catcher);

    players.save(&mut first).unwrap();
    let err = players.save(&mut second).unwrap_err();

    assert_eq!(err, DalError::DuplicateId { kind: "player", id: 1 });
    assert_eq!(players.retrieve_all().unwrap().len(), 1);
}

#[test]
fn test_retrieve_all_resolves_each_team() {
    let (teams, players) = boston_bridges();
    teams
        .save(&mut Team::new(Some(1), "Chicago", "Cubs", "CHC"))
        .unwrap();
    players
        .save(&mut Player::new(Some(0), "A", "B", 1, Some(0), Position::Pitcher))
        .unwrap();
    players
        .save(&mut Player::new(Some(1), "C", "D", 2, Some(1), Position::Catcher))
        .unwrap();

    let cities: Vec<_> = players
        .retrieve_all()
        .unwrap()
        .iter()
        .map(|p| p.team().and_then(|t| t.city.clone()))
        .collect();

    assert_eq!(
        cities,
        vec![Some("Boston".to_string()), Some("Chicago".to_string())]
    );
}

proptest! {
    #[test]
    fn prop_player_round_trip(record in player_record_strategy()) {
        let (_, players) = boston_bridges();

        let player = players.to_domain(record.clone()).unwrap();
        let again = players.to_domain(players.to_record(&player)).unwrap();

        prop_assert_eq!(players.to_record(&player), record);
        prop_assert_eq!(again, player);
    }

    #[test]
    fn prop_team_round_trip(id in any::<i64>(), city in "[A-Za-z ]{1,16}") {
        let (teams, _) = new_bridges();
        let team = Team::new(Some(id), city, "Nick", "NCK");

        let again = teams.to_domain(teams.to_record(&team)).unwrap();

        prop_assert_eq!(again, team);
    }
}
