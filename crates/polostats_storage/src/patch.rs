//! Field-level patches for record updates.
//!
//! Plain fields use `Option`: `Some(v)` sets the field, `None` leaves it
//! alone. Nullable fields (including every reference field) use a nested
//! `Option`: the outer level selects the field for change, the inner level
//! is the new value, so a patch can clear a reference as well as reassign
//! it.

use chrono::{DateTime, Utc};
use polostats_foundation::{EntityKind, Error, RecordId, Result};

use crate::model::{EventType, GameStatus, Record};

/// Changes to a [`crate::Team`].
#[derive(Clone, Debug, Default)]
pub struct TeamPatch {
    /// New squad name.
    pub name: Option<String>,
    /// New club name.
    pub club_name: Option<String>,
    /// New competition level.
    pub level: Option<String>,
    /// Set or clear the display color.
    pub team_color: Option<Option<String>>,
    /// New season year.
    pub season_year: Option<i16>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Changes to a [`crate::Season`].
#[derive(Clone, Debug, Default)]
pub struct SeasonPatch {
    /// New year.
    pub year: Option<i16>,
    /// New first day of play.
    pub start_date: Option<DateTime<Utc>>,
    /// New last day of play.
    pub end_date: Option<DateTime<Utc>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Changes to a [`crate::Player`].
///
/// Applying any player patch bumps `updated_at`.
#[derive(Clone, Debug, Default)]
pub struct PlayerPatch {
    /// New name.
    pub name: Option<String>,
    /// New jersey number.
    pub number: Option<String>,
    /// Set or clear the governing-body id.
    pub nsca_id: Option<Option<String>>,
    /// Set or clear the date of birth.
    pub date_of_birth: Option<Option<DateTime<Utc>>>,
    /// Set or clear the profile photo blob.
    pub profile_photo: Option<Option<Vec<u8>>>,
    /// Reassign or clear the team reference.
    pub team: Option<Option<RecordId>>,
}

/// Changes to a [`crate::Game`].
#[derive(Clone, Debug, Default)]
pub struct GamePatch {
    /// New scheduled start.
    pub date: Option<DateTime<Utc>>,
    /// New venue.
    pub location: Option<String>,
    /// New lifecycle state.
    pub status: Option<GameStatus>,
    /// Reassign or clear the home team.
    pub home_team: Option<Option<RecordId>>,
    /// Reassign or clear the away team.
    pub away_team: Option<Option<RecordId>>,
    /// Reassign or clear the season.
    pub season: Option<Option<RecordId>>,
}

/// Changes to a [`crate::GameRoster`].
#[derive(Clone, Debug, Default)]
pub struct GameRosterPatch {
    /// New cap number.
    pub cap_number: Option<i16>,
    /// New roster order.
    pub roster_order: Option<i16>,
    /// New goalie flag.
    pub is_goalie: Option<bool>,
    /// New home-side flag.
    pub is_home_team: Option<bool>,
    /// New entry time.
    pub entered_game_at: Option<DateTime<Utc>>,
    /// Set or clear the exit time.
    pub exited_game_at: Option<Option<DateTime<Utc>>>,
    /// Reassign or clear the game reference.
    pub game: Option<Option<RecordId>>,
    /// Reassign or clear the player reference.
    pub player: Option<Option<RecordId>>,
}

/// Changes to a [`crate::GameEvent`].
#[derive(Clone, Debug, Default)]
pub struct GameEventPatch {
    /// New event type.
    pub event_type: Option<EventType>,
    /// New period number.
    pub period: Option<i16>,
    /// New game-clock time.
    pub period_time: Option<String>,
    /// New recorded wall-clock time.
    pub timestamp: Option<DateTime<Utc>>,
    /// Reassign or clear the game reference.
    pub game: Option<Option<RecordId>>,
    /// Reassign or clear the player reference.
    pub player: Option<Option<RecordId>>,
}

/// A patch for any record kind.
#[derive(Clone, Debug)]
pub enum Patch {
    /// Changes to a team.
    Team(TeamPatch),
    /// Changes to a season.
    Season(SeasonPatch),
    /// Changes to a player.
    Player(PlayerPatch),
    /// Changes to a game.
    Game(GamePatch),
    /// Changes to a roster entry.
    GameRoster(GameRosterPatch),
    /// Changes to an event.
    GameEvent(GameEventPatch),
}

impl Patch {
    /// The record kind this patch applies to.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Patch::Team(_) => EntityKind::Team,
            Patch::Season(_) => EntityKind::Season,
            Patch::Player(_) => EntityKind::Player,
            Patch::Game(_) => EntityKind::Game,
            Patch::GameRoster(_) => EntityKind::GameRoster,
            Patch::GameEvent(_) => EntityKind::GameEvent,
        }
    }

    /// Applies the patch in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] when the patch and record kinds
    /// differ; the record is untouched in that case.
    pub(crate) fn apply_to(self, record: &mut Record) -> Result<()> {
        match (record, self) {
            (Record::Team(t), Patch::Team(p)) => {
                if let Some(v) = p.name {
                    t.name = v;
                }
                if let Some(v) = p.club_name {
                    t.club_name = v;
                }
                if let Some(v) = p.level {
                    t.level = v;
                }
                if let Some(v) = p.team_color {
                    t.team_color = v;
                }
                if let Some(v) = p.season_year {
                    t.season_year = v;
                }
                if let Some(v) = p.is_active {
                    t.is_active = v;
                }
                Ok(())
            }
            (Record::Season(s), Patch::Season(p)) => {
                if let Some(v) = p.year {
                    s.year = v;
                }
                if let Some(v) = p.start_date {
                    s.start_date = v;
                }
                if let Some(v) = p.end_date {
                    s.end_date = v;
                }
                if let Some(v) = p.is_active {
                    s.is_active = v;
                }
                Ok(())
            }
            (Record::Player(pl), Patch::Player(p)) => {
                if let Some(v) = p.name {
                    pl.name = v;
                }
                if let Some(v) = p.number {
                    pl.number = v;
                }
                if let Some(v) = p.nsca_id {
                    pl.nsca_id = v;
                }
                if let Some(v) = p.date_of_birth {
                    pl.date_of_birth = v;
                }
                if let Some(v) = p.profile_photo {
                    pl.profile_photo = v;
                }
                if let Some(v) = p.team {
                    pl.team = v;
                }
                pl.updated_at = Utc::now();
                Ok(())
            }
            (Record::Game(g), Patch::Game(p)) => {
                if let Some(v) = p.date {
                    g.date = v;
                }
                if let Some(v) = p.location {
                    g.location = v;
                }
                if let Some(v) = p.status {
                    g.status = v;
                }
                if let Some(v) = p.home_team {
                    g.home_team = v;
                }
                if let Some(v) = p.away_team {
                    g.away_team = v;
                }
                if let Some(v) = p.season {
                    g.season = v;
                }
                Ok(())
            }
            (Record::GameRoster(r), Patch::GameRoster(p)) => {
                if let Some(v) = p.cap_number {
                    r.cap_number = v;
                }
                if let Some(v) = p.roster_order {
                    r.roster_order = v;
                }
                if let Some(v) = p.is_goalie {
                    r.is_goalie = v;
                }
                if let Some(v) = p.is_home_team {
                    r.is_home_team = v;
                }
                if let Some(v) = p.entered_game_at {
                    r.entered_game_at = v;
                }
                if let Some(v) = p.exited_game_at {
                    r.exited_game_at = v;
                }
                if let Some(v) = p.game {
                    r.game = v;
                }
                if let Some(v) = p.player {
                    r.player = v;
                }
                Ok(())
            }
            (Record::GameEvent(e), Patch::GameEvent(p)) => {
                if let Some(v) = p.event_type {
                    e.event_type = v;
                }
                if let Some(v) = p.period {
                    e.period = v;
                }
                if let Some(v) = p.period_time {
                    e.period_time = v;
                }
                if let Some(v) = p.timestamp {
                    e.timestamp = v;
                }
                if let Some(v) = p.game {
                    e.game = v;
                }
                if let Some(v) = p.player {
                    e.player = v;
                }
                Ok(())
            }
            (record, patch) => Err(Error::kind_mismatch(patch.kind(), record.kind())),
        }
    }
}

impl From<TeamPatch> for Patch {
    fn from(p: TeamPatch) -> Self {
        Patch::Team(p)
    }
}

impl From<SeasonPatch> for Patch {
    fn from(p: SeasonPatch) -> Self {
        Patch::Season(p)
    }
}

impl From<PlayerPatch> for Patch {
    fn from(p: PlayerPatch) -> Self {
        Patch::Player(p)
    }
}

impl From<GamePatch> for Patch {
    fn from(p: GamePatch) -> Self {
        Patch::Game(p)
    }
}

impl From<GameRosterPatch> for Patch {
    fn from(p: GameRosterPatch) -> Self {
        Patch::GameRoster(p)
    }
}

impl From<GameEventPatch> for Patch {
    fn from(p: GameEventPatch) -> Self {
        Patch::GameEvent(p)
    }
}
