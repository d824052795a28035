//! Integration tests for the shared store handle
//!
//! Tests concurrent reads and writes through `SharedStore` and snapshot
//! isolation.

use std::thread;

use chrono::Utc;
use polostats_foundation::EntityKind;
use polostats_storage::{EntityStore, Game, Player, SharedStore, Team};

#[test]
fn readers_see_committed_writes() {
    let shared = SharedStore::new();
    let team = shared
        .write(|store| store.insert(Team::new("680", "Red")))
        .unwrap();

    let club = shared.read(|store| store.team(team).unwrap().club_name.clone());
    assert_eq!(club, "680");
}

#[test]
fn concurrent_writers_never_lose_records() {
    let shared = SharedStore::new();
    let team = shared
        .write(|store| store.insert(Team::new("680", "Red")))
        .unwrap();

    let writers: Vec<_> = (0..4)
        .map(|n| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    shared
                        .write(|store| {
                            store.insert(
                                Player::new(format!("P{n}-{i}"), format!("{i}")).with_team(team),
                            )
                        })
                        .unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                // Every observation must be internally consistent even while
                // writers interleave.
                for _ in 0..50 {
                    shared.read(|store| {
                        let by_index = store.players_on_team(team).len();
                        let by_scan = store
                            .players()
                            .filter(|p| p.team == Some(team))
                            .count();
                        assert_eq!(by_index, by_scan);
                    });
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }
    assert_eq!(shared.read(|s| s.count(EntityKind::Player)), 100);
}

#[test]
fn snapshot_is_a_frozen_point_in_time() {
    let shared = SharedStore::new();
    shared
        .write(|store| store.insert(Game::new(Utc::now(), "Soda Center")))
        .unwrap();

    let snapshot = shared.snapshot();
    shared
        .write(|store| store.insert(Game::new(Utc::now(), "Lawson Pool")))
        .unwrap();

    assert_eq!(snapshot.count(EntityKind::Game), 1);
    assert_eq!(shared.read(EntityStore::len), 2);
}

#[test]
fn a_prebuilt_store_can_be_shared() {
    let mut store = EntityStore::new();
    store.insert(Team::new("680", "Red")).unwrap();

    let shared = SharedStore::from(store);
    assert_eq!(shared.read(|s| s.count(EntityKind::Team)), 1);
}
