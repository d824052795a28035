//! Integration tests for record insertion
//!
//! Tests identity, reference validation, and inverse-index registration.

use chrono::Utc;
use polostats_foundation::{EntityKind, Error, RecordId};
use polostats_storage::{
    EntityStore, EventType, Game, GameEvent, GameRoster, Player, RefField, Season, Team,
};

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn every_kind_round_trips() {
    let mut store = EntityStore::new();
    let now = Utc::now();

    let team = store.insert(Team::new("680", "Red")).unwrap();
    let season = store.insert(Season::new(2025, now, now)).unwrap();
    let player = store.insert(Player::new("Kim", "7").with_team(team)).unwrap();
    let game = store
        .insert(
            Game::new(now, "Soda Center")
                .with_home_team(team)
                .with_season(season),
        )
        .unwrap();
    let roster = store.insert(GameRoster::new(game, player, 7, true)).unwrap();
    let event = store
        .insert(GameEvent::new(game, EventType::Goal, 1, "04:31").with_player(player))
        .unwrap();

    assert_eq!(store.len(), 6);
    assert_eq!(store.team(team).unwrap().club_name, "680");
    assert_eq!(store.season(season).unwrap().year, 2025);
    assert_eq!(store.player(player).unwrap().team, Some(team));
    assert_eq!(store.game(game).unwrap().season, Some(season));
    assert_eq!(store.roster(roster).unwrap().cap_number, 7);
    assert_eq!(store.event(event).unwrap().event_type, EventType::Goal);
}

#[test]
fn typed_accessor_rejects_other_kinds() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();
    assert!(store.player(team).is_none());
    assert!(store.team(team).is_some());
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn duplicate_id_is_rejected_across_kinds() {
    let mut store = EntityStore::new();
    let id = store.insert(Team::new("680", "Red")).unwrap();

    let mut player = Player::new("Kim", "7");
    player.id = id;
    assert_eq!(store.insert(player), Err(Error::DuplicateId(id)));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Reference Validation
// =============================================================================

#[test]
fn references_must_exist_at_insert_time() {
    let mut store = EntityStore::new();
    let ghost = RecordId::new();

    let err = store
        .insert(Game::new(Utc::now(), "Soda Center").with_home_team(ghost))
        .unwrap_err();
    assert_eq!(
        err,
        Error::DanglingReference {
            field: "homeTeam",
            target: ghost,
        }
    );
    assert!(store.is_empty());
}

#[test]
fn references_must_point_at_the_declared_kind() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();

    // A game is not a player.
    let err = store
        .insert(GameRoster::new(team, team, 7, true))
        .unwrap_err();
    assert_eq!(
        err,
        Error::KindMismatch {
            expected: EntityKind::Game,
            actual: EntityKind::Team,
        }
    );
}

#[test]
fn rejected_insert_leaves_no_partial_state() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();
    let before = store.clone();

    // homeTeam resolves, season dangles; neither side may stick.
    let ghost = RecordId::new();
    let result = store.insert(
        Game::new(Utc::now(), "Soda Center")
            .with_home_team(team)
            .with_season(ghost),
    );
    assert!(result.is_err());
    assert_eq!(store, before);
    assert_eq!(store.sources(team, RefField::GameHomeTeam).count(), 0);
}

// =============================================================================
// Inverse Registration
// =============================================================================

#[test]
fn insert_populates_the_to_many_side() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();

    let a = store.insert(Player::new("Ada", "1").with_team(team)).unwrap();
    let b = store.insert(Player::new("Bo", "2").with_team(team)).unwrap();

    let mut members: Vec<RecordId> = store.sources(team, RefField::PlayerTeam).collect();
    members.sort_unstable();
    let mut expected = vec![a, b];
    expected.sort_unstable();
    assert_eq!(members, expected);
}

#[test]
fn a_team_on_both_sides_of_a_game_is_indexed_per_field() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();
    let game = store
        .insert(
            Game::new(Utc::now(), "Practice Pool")
                .with_home_team(team)
                .with_away_team(team),
        )
        .unwrap();

    assert_eq!(
        store.sources(team, RefField::GameHomeTeam).collect::<Vec<_>>(),
        vec![game]
    );
    assert_eq!(
        store.sources(team, RefField::GameAwayTeam).collect::<Vec<_>>(),
        vec![game]
    );
}
