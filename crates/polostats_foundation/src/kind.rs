//! Kind descriptors for the six record types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six record types held by the store.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityKind {
    /// A team (club, level, active flag).
    Team,
    /// A season (year, date range, active flag).
    Season,
    /// A player, optionally assigned to a team.
    Player,
    /// A game between a home and an away team, within a season.
    Game,
    /// A join record: one player's roster slot in one game.
    GameRoster,
    /// An in-game event attributed to a player.
    GameEvent,
}

impl EntityKind {
    /// All kinds, in a stable order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Team,
        EntityKind::Season,
        EntityKind::Player,
        EntityKind::Game,
        EntityKind::GameRoster,
        EntityKind::GameEvent,
    ];

    /// The schema name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Team => "Team",
            EntityKind::Season => "Season",
            EntityKind::Player => "Player",
            EntityKind::Game => "Game",
            EntityKind::GameRoster => "GameRoster",
            EntityKind::GameEvent => "GameEvent",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
