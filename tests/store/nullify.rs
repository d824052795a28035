//! Integration tests for nullify deletion
//!
//! Tests that deleting teams and seasons clears back-references on
//! survivors, and that the policy override turns a team deletion into a
//! roster-wide cascade.

use chrono::Utc;
use polostats_foundation::EntityKind;
use polostats_storage::{
    EntityStore, EventType, Game, GameEvent, GameRoster, OnDelete, Player, Season, StorePolicy,
    Team,
};

// =============================================================================
// Season Deletion
// =============================================================================

#[test]
fn deleting_a_season_detaches_its_games() {
    let mut store = EntityStore::new();
    let now = Utc::now();
    let season = store.insert(Season::new(2025, now, now)).unwrap();
    let game = store
        .insert(Game::new(now, "Soda Center").with_season(season))
        .unwrap();

    store.delete(season).unwrap();

    let game = store.game(game).unwrap();
    assert_eq!(game.season, None);
    assert_eq!(game.location, "Soda Center");
}

// =============================================================================
// Team Deletion (default policy)
// =============================================================================

#[test]
fn deleting_a_team_orphans_players_and_games() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();
    let rival = store.insert(Team::new("SHAQ", "Blue")).unwrap();
    let player = store.insert(Player::new("Kim", "7").with_team(team)).unwrap();
    let game = store
        .insert(
            Game::new(Utc::now(), "Soda Center")
                .with_home_team(team)
                .with_away_team(rival),
        )
        .unwrap();

    store.delete(team).unwrap();

    assert!(store.contains(player));
    assert_eq!(store.player(player).unwrap().team, None);
    let game = store.game(game).unwrap();
    assert_eq!(game.home_team, None);
    assert_eq!(game.away_team, Some(rival));
}

#[test]
fn a_team_on_both_sides_is_cleared_from_both() {
    let mut store = EntityStore::new();
    let team = store.insert(Team::new("680", "Red")).unwrap();
    let game = store
        .insert(
            Game::new(Utc::now(), "Practice Pool")
                .with_home_team(team)
                .with_away_team(team),
        )
        .unwrap();

    store.delete(team).unwrap();

    let game = store.game(game).unwrap();
    assert_eq!(game.home_team, None);
    assert_eq!(game.away_team, None);
}

// =============================================================================
// Team Deletion (cascade policy)
// =============================================================================

#[test]
fn cascade_policy_takes_the_roster_down_with_the_team() {
    let policy = StorePolicy {
        team_player_rule: OnDelete::Cascade,
        ..StorePolicy::default()
    };
    let mut store = EntityStore::with_policy(policy);

    let team = store.insert(Team::new("680", "Red")).unwrap();
    let player = store.insert(Player::new("Kim", "7").with_team(team)).unwrap();
    let game = store.insert(Game::new(Utc::now(), "Soda Center")).unwrap();
    store.insert(GameRoster::new(game, player, 7, true)).unwrap();
    store
        .insert(GameEvent::new(game, EventType::Goal, 1, "04:31").with_player(player))
        .unwrap();

    store.delete(team).unwrap();

    // Team → player → roster/event, three levels deep.
    assert!(!store.contains(player));
    assert_eq!(store.count(EntityKind::GameRoster), 0);
    assert_eq!(store.count(EntityKind::GameEvent), 0);
    assert!(store.contains(game));
}

#[test]
fn cascade_policy_spares_unaffiliated_players() {
    let policy = StorePolicy {
        team_player_rule: OnDelete::Cascade,
        ..StorePolicy::default()
    };
    let mut store = EntityStore::with_policy(policy);

    let team = store.insert(Team::new("680", "Red")).unwrap();
    let member = store.insert(Player::new("Kim", "7").with_team(team)).unwrap();
    let free_agent = store.insert(Player::new("Bo", "2")).unwrap();

    store.delete(team).unwrap();

    assert!(!store.contains(member));
    assert!(store.contains(free_agent));
}
