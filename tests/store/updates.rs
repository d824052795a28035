//! Integration tests for patch updates
//!
//! Tests selective field changes, reference reassignment, and update
//! atomicity.

use chrono::Utc;
use polostats_foundation::{EntityKind, Error, RecordId};
use polostats_storage::{
    EntityStore, Game, GamePatch, GameStatus, Player, PlayerPatch, RefField, Team, TeamPatch,
};

// =============================================================================
// Field Changes
// =============================================================================

#[test]
fn patch_touches_only_named_fields() {
    let mut store = EntityStore::new();
    let team = store
        .insert(Team::new("680", "Red").with_level("14U"))
        .unwrap();

    store
        .update(
            team,
            TeamPatch {
                name: Some("Crimson".to_string()),
                ..TeamPatch::default()
            },
        )
        .unwrap();

    let team = store.team(team).unwrap();
    assert_eq!(team.name, "Crimson");
    assert_eq!(team.club_name, "680");
    assert_eq!(team.level, "14U");
}

#[test]
fn game_walks_its_lifecycle() {
    let mut store = EntityStore::new();
    let game = store.insert(Game::new(Utc::now(), "Soda Center")).unwrap();
    assert_eq!(store.game(game).unwrap().status, GameStatus::Ready);

    for status in [
        GameStatus::InProgress,
        GameStatus::Paused,
        GameStatus::InProgress,
        GameStatus::Completed,
    ] {
        store
            .update(
                game,
                GamePatch {
                    status: Some(status),
                    ..GamePatch::default()
                },
            )
            .unwrap();
        assert_eq!(store.game(game).unwrap().status, status);
    }
}

// =============================================================================
// Reference Reassignment
// =============================================================================

#[test]
fn reassigning_a_team_moves_inverse_membership() {
    let mut store = EntityStore::new();
    let old_team = store.insert(Team::new("680", "Red")).unwrap();
    let new_team = store.insert(Team::new("SHAQ", "Blue")).unwrap();
    let player = store
        .insert(Player::new("Kim", "7").with_team(old_team))
        .unwrap();

    store
        .update(
            player,
            PlayerPatch {
                team: Some(Some(new_team)),
                ..PlayerPatch::default()
            },
        )
        .unwrap();

    assert_eq!(store.sources(old_team, RefField::PlayerTeam).count(), 0);
    assert_eq!(
        store.sources(new_team, RefField::PlayerTeam).collect::<Vec<_>>(),
        vec![player]
    );
    assert_eq!(store.player(player).unwrap().team, Some(new_team));
}

#[test]
fn clearing_a_reference_drops_the_index_edge() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();
    let player = store.insert(Player::new("Kim", "7").with_team(team)).unwrap();

    store
        .update(
            player,
            PlayerPatch {
                team: Some(None),
                ..PlayerPatch::default()
            },
        )
        .unwrap();

    assert_eq!(store.player(player).unwrap().team, None);
    assert_eq!(store.sources(team, RefField::PlayerTeam).count(), 0);
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn updating_an_unknown_id_fails() {
    let mut store = EntityStore::new();
    let ghost = RecordId::new();
    assert_eq!(
        store.update(ghost, TeamPatch::default()),
        Err(Error::NotFound(ghost))
    );
}

#[test]
fn patch_kind_must_match_record_kind() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();

    let err = store.update(team, PlayerPatch::default()).unwrap_err();
    assert_eq!(
        err,
        Error::KindMismatch {
            expected: EntityKind::Player,
            actual: EntityKind::Team,
        }
    );
}

#[test]
fn failed_reassignment_keeps_the_old_reference() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();
    let player = store.insert(Player::new("Kim", "7").with_team(team)).unwrap();
    let before = store.clone();

    let ghost = RecordId::new();
    let result = store.update(
        player,
        PlayerPatch {
            team: Some(Some(ghost)),
            ..PlayerPatch::default()
        },
    );
    assert!(result.is_err());
    assert_eq!(store, before);
    assert_eq!(
        store.sources(team, RefField::PlayerTeam).collect::<Vec<_>>(),
        vec![player]
    );
}
