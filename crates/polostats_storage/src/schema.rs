//! The relation schema: deletion rules as a static table.
//!
//! Each entity kind declares its relations in a fixed order, mirroring the
//! source schema document. Deletion dispatch walks this table rather than
//! scattering per-kind conditionals, and the fixed declaration order makes
//! cascade side effects reproducible.

use polostats_foundation::EntityKind;

/// What happens to related records when the declaring record is deleted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OnDelete {
    /// Related records are deleted as well, recursively.
    Cascade,
    /// The reference back to the deleted record is cleared; related records
    /// survive.
    Nullify,
}

/// A to-one reference field carried by a record.
///
/// Every relation in the schema is realized by exactly one of these fields;
/// the to-many side is a store-maintained reverse index over them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RefField {
    /// `Player.team` → Team.
    PlayerTeam,
    /// `Game.home_team` → Team.
    GameHomeTeam,
    /// `Game.away_team` → Team.
    GameAwayTeam,
    /// `Game.season` → Season.
    GameSeason,
    /// `GameEvent.game` → Game.
    EventGame,
    /// `GameEvent.player` → Player.
    EventPlayer,
    /// `GameRoster.game` → Game.
    RosterGame,
    /// `GameRoster.player` → Player.
    RosterPlayer,
}

impl RefField {
    /// The kind that carries this field.
    #[must_use]
    pub const fn owner(self) -> EntityKind {
        match self {
            RefField::PlayerTeam => EntityKind::Player,
            RefField::GameHomeTeam | RefField::GameAwayTeam | RefField::GameSeason => {
                EntityKind::Game
            }
            RefField::EventGame | RefField::EventPlayer => EntityKind::GameEvent,
            RefField::RosterGame | RefField::RosterPlayer => EntityKind::GameRoster,
        }
    }

    /// The kind this field must point to.
    #[must_use]
    pub const fn target(self) -> EntityKind {
        match self {
            RefField::PlayerTeam | RefField::GameHomeTeam | RefField::GameAwayTeam => {
                EntityKind::Team
            }
            RefField::GameSeason => EntityKind::Season,
            RefField::EventGame | RefField::RosterGame => EntityKind::Game,
            RefField::EventPlayer | RefField::RosterPlayer => EntityKind::Player,
        }
    }

    /// The schema name of the field, as it appears in the durable contract.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RefField::PlayerTeam => "team",
            RefField::GameHomeTeam => "homeTeam",
            RefField::GameAwayTeam => "awayTeam",
            RefField::GameSeason => "season",
            RefField::EventGame | RefField::RosterGame => "game",
            RefField::EventPlayer | RefField::RosterPlayer => "player",
        }
    }

    /// The reference fields carried by records of `kind`, in validation
    /// order.
    #[must_use]
    pub const fn for_kind(kind: EntityKind) -> &'static [RefField] {
        match kind {
            EntityKind::Team | EntityKind::Season => &[],
            EntityKind::Player => &[RefField::PlayerTeam],
            EntityKind::Game => &[
                RefField::GameHomeTeam,
                RefField::GameAwayTeam,
                RefField::GameSeason,
            ],
            EntityKind::GameEvent => &[RefField::EventGame, RefField::EventPlayer],
            EntityKind::GameRoster => &[RefField::RosterGame, RefField::RosterPlayer],
        }
    }
}

/// How a relation is realized relative to its declaring kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RelationKind {
    /// The declaring record carries the reference field itself.
    ToOne,
    /// Related records point back at the declaring record through `via`.
    ToMany,
}

/// One relation declaration: name, realization, and deletion rule.
#[derive(Copy, Clone, Debug)]
pub struct Relation {
    /// Schema name of the relation (`"players"`, `"events"`, ...).
    pub name: &'static str,
    /// Whether the declaring side holds the reference or is pointed at.
    pub kind: RelationKind,
    /// The reference field that realizes the relation.
    pub via: RefField,
    /// Rule applied to related records when the declaring record is deleted.
    pub on_delete: OnDelete,
}

/// Relations declared by `kind`, in declaration order.
///
/// Declaration order follows the source schema document (alphabetical per
/// entity). Cascade processing iterates this slice in order, so deletion
/// side effects are deterministic.
#[must_use]
pub const fn relations(kind: EntityKind) -> &'static [Relation] {
    match kind {
        EntityKind::Team => &[
            Relation {
                name: "awayGames",
                kind: RelationKind::ToMany,
                via: RefField::GameAwayTeam,
                on_delete: OnDelete::Nullify,
            },
            Relation {
                name: "homeGames",
                kind: RelationKind::ToMany,
                via: RefField::GameHomeTeam,
                on_delete: OnDelete::Nullify,
            },
            // Default rule; overridable through `StorePolicy::team_player_rule`.
            Relation {
                name: "players",
                kind: RelationKind::ToMany,
                via: RefField::PlayerTeam,
                on_delete: OnDelete::Nullify,
            },
        ],
        EntityKind::Season => &[Relation {
            name: "games",
            kind: RelationKind::ToMany,
            via: RefField::GameSeason,
            on_delete: OnDelete::Nullify,
        }],
        EntityKind::Player => &[
            Relation {
                name: "events",
                kind: RelationKind::ToMany,
                via: RefField::EventPlayer,
                on_delete: OnDelete::Cascade,
            },
            Relation {
                name: "rosters",
                kind: RelationKind::ToMany,
                via: RefField::RosterPlayer,
                on_delete: OnDelete::Cascade,
            },
            Relation {
                name: "team",
                kind: RelationKind::ToOne,
                via: RefField::PlayerTeam,
                on_delete: OnDelete::Nullify,
            },
        ],
        EntityKind::Game => &[
            Relation {
                name: "awayTeam",
                kind: RelationKind::ToOne,
                via: RefField::GameAwayTeam,
                on_delete: OnDelete::Nullify,
            },
            Relation {
                name: "events",
                kind: RelationKind::ToMany,
                via: RefField::EventGame,
                on_delete: OnDelete::Cascade,
            },
            Relation {
                name: "homeTeam",
                kind: RelationKind::ToOne,
                via: RefField::GameHomeTeam,
                on_delete: OnDelete::Nullify,
            },
            Relation {
                name: "rosters",
                kind: RelationKind::ToMany,
                via: RefField::RosterGame,
                on_delete: OnDelete::Cascade,
            },
            Relation {
                name: "season",
                kind: RelationKind::ToOne,
                via: RefField::GameSeason,
                on_delete: OnDelete::Nullify,
            },
        ],
        EntityKind::GameEvent => &[
            Relation {
                name: "game",
                kind: RelationKind::ToOne,
                via: RefField::EventGame,
                on_delete: OnDelete::Nullify,
            },
            Relation {
                name: "player",
                kind: RelationKind::ToOne,
                via: RefField::EventPlayer,
                on_delete: OnDelete::Nullify,
            },
        ],
        EntityKind::GameRoster => &[
            Relation {
                name: "game",
                kind: RelationKind::ToOne,
                via: RefField::RosterGame,
                on_delete: OnDelete::Nullify,
            },
            Relation {
                name: "player",
                kind: RelationKind::ToOne,
                via: RefField::RosterPlayer,
                on_delete: OnDelete::Nullify,
            },
        ],
    }
}

/// Tunable integrity policy for behaviors the source schema leaves open.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StorePolicy {
    /// Rule applied to a team's players when the team is deleted.
    pub team_player_rule: OnDelete,
    /// Reject a second roster entry for the same (game, player) pair.
    ///
    /// Off by default: the source model uses multiple entries per player to
    /// represent mid-game cap swaps.
    pub reject_duplicate_rosters: bool,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            team_player_rule: OnDelete::Nullify,
            reject_duplicate_rosters: false,
        }
    }
}
