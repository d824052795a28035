//! The six record types and their shared sum type.
//!
//! Records reference each other by id (`Option<RecordId>` fields), never by
//! owning pointers: the relationship graph is cyclic (Game↔Team,
//! Game↔Season, Player↔Team, Game↔GameEvent↔Player), so ownership lives in
//! the store's arena and the reverse direction in its index.

use std::fmt;

use chrono::{DateTime, Utc};
use polostats_foundation::{EntityKind, RecordId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::schema::RefField;

/// Lifecycle state of a persisted game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    /// Configured, clock not yet started.
    Ready,
    /// Clock running.
    InProgress,
    /// Clock stopped mid-game.
    Paused,
    /// Final whistle blown.
    Completed,
}

impl GameStatus {
    /// The wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ready => "ready",
            GameStatus::InProgress => "in_progress",
            GameStatus::Paused => "paused",
            GameStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of in-game event.
///
/// The known variants cover the standard stat lines; anything else round
/// trips through [`EventType::Other`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventType {
    /// A goal scored.
    Goal,
    /// An assist on a goal.
    Assist,
    /// A steal.
    Steal,
    /// A major foul exclusion (kick-out).
    Exclusion,
    /// A turnover.
    Turnover,
    /// An ordinary foul.
    Foul,
    /// Any event type this model does not enumerate.
    Other(String),
}

impl EventType {
    /// The wire string for this event type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Goal => "goal",
            EventType::Assist => "assist",
            EventType::Steal => "steal",
            EventType::Exclusion => "exclusion",
            EventType::Turnover => "turnover",
            EventType::Foul => "foul",
            EventType::Other(kind) => kind,
        }
    }

    /// A readable line for game logs, e.g. `"Kim scored a goal"`.
    #[must_use]
    pub fn describe(&self, player_name: &str) -> String {
        match self {
            EventType::Goal => format!("{player_name} scored a goal"),
            EventType::Assist => format!("{player_name} made an assist"),
            EventType::Steal => format!("{player_name} made a steal"),
            EventType::Exclusion => format!("{player_name} was excluded"),
            EventType::Turnover => format!("{player_name} turned over the ball"),
            EventType::Foul => format!("{player_name} committed a foul"),
            EventType::Other(kind) => format!("{player_name}: {kind}"),
        }
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "goal" => EventType::Goal,
            "assist" => EventType::Assist,
            "steal" => EventType::Steal,
            "exclusion" => EventType::Exclusion,
            "turnover" => EventType::Turnover,
            "foul" => EventType::Foul,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Event types serialize as their bare wire string so the persisted form
// matches the schema's `eventType` attribute.
#[cfg(feature = "serde")]
impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EventType::from(s.as_str()))
    }
}

/// A team: club, squad name, competition level, and active flag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Team {
    /// Unique identifier.
    pub id: RecordId,
    /// Squad name within the club ("Red", "Bears", ...).
    pub name: String,
    /// Club name ("680", "Clayton Valley", ...).
    pub club_name: String,
    /// Competition level ("14U", "Varsity", ...).
    pub level: String,
    /// Display color, if chosen.
    pub team_color: Option<String>,
    /// Season year the team was formed for.
    pub season_year: i16,
    /// Whether the team is currently active.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Creates an active team created now.
    #[must_use]
    pub fn new(club_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            club_name: club_name.into(),
            level: String::new(),
            team_color: None,
            season_year: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Sets the competition level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets the display color.
    #[must_use]
    pub fn with_team_color(mut self, color: impl Into<String>) -> Self {
        self.team_color = Some(color.into());
        self
    }

    /// Sets the season year.
    #[must_use]
    pub fn with_season_year(mut self, year: i16) -> Self {
        self.season_year = year;
        self
    }

    /// Club and squad name joined, falling back gracefully when either is
    /// empty: `"680 Red"`, `"Clayton Valley"`, ...
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.club_name.as_str(), self.name.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            "Unknown Team".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// A season: year and date range. At most one season is active at a time by
/// convention; the store does not enforce it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Season {
    /// Unique identifier.
    pub id: RecordId,
    /// Calendar year the season is named for.
    pub year: i16,
    /// First day of play.
    pub start_date: DateTime<Utc>,
    /// Last day of play.
    pub end_date: DateTime<Utc>,
    /// Whether this is the current season.
    pub is_active: bool,
}

impl Season {
    /// Creates an inactive season.
    #[must_use]
    pub fn new(year: i16, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            year,
            start_date,
            end_date,
            is_active: false,
        }
    }

    /// Marks the season active.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

/// A player, optionally assigned to a team.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    /// Unique identifier.
    pub id: RecordId,
    /// Full name.
    pub name: String,
    /// Jersey number as entered (kept as text; cap numbers live on rosters).
    pub number: String,
    /// National governing body id, if registered.
    pub nsca_id: Option<String>,
    /// Date of birth, if known.
    pub date_of_birth: Option<DateTime<Utc>>,
    /// Profile photo as an opaque blob; never interpreted by the store.
    pub profile_photo: Option<Vec<u8>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time; bumped by the store on every player patch.
    pub updated_at: DateTime<Utc>,
    /// The team this player belongs to.
    pub team: Option<RecordId>,
}

impl Player {
    /// Creates an unassigned player created now.
    #[must_use]
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            name: name.into(),
            number: number.into(),
            nsca_id: None,
            date_of_birth: None,
            profile_photo: None,
            created_at: now,
            updated_at: now,
            team: None,
        }
    }

    /// Assigns the player to a team.
    #[must_use]
    pub fn with_team(mut self, team: RecordId) -> Self {
        self.team = Some(team);
        self
    }

    /// Sets the governing-body id.
    #[must_use]
    pub fn with_nsca_id(mut self, nsca_id: impl Into<String>) -> Self {
        self.nsca_id = Some(nsca_id.into());
        self
    }

    /// Sets the date of birth.
    #[must_use]
    pub fn with_date_of_birth(mut self, dob: DateTime<Utc>) -> Self {
        self.date_of_birth = Some(dob);
        self
    }

    /// Attaches a profile photo blob.
    #[must_use]
    pub fn with_profile_photo(mut self, photo: Vec<u8>) -> Self {
        self.profile_photo = Some(photo);
        self
    }
}

/// A game between two teams, within a season.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Game {
    /// Unique identifier.
    pub id: RecordId,
    /// Scheduled start.
    pub date: DateTime<Utc>,
    /// Pool or venue name.
    pub location: String,
    /// Lifecycle state.
    pub status: GameStatus,
    /// The home team.
    pub home_team: Option<RecordId>,
    /// The away team.
    pub away_team: Option<RecordId>,
    /// The season this game counts toward.
    pub season: Option<RecordId>,
}

impl Game {
    /// Creates a game in [`GameStatus::Ready`] with no teams attached.
    #[must_use]
    pub fn new(date: DateTime<Utc>, location: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            date,
            location: location.into(),
            status: GameStatus::Ready,
            home_team: None,
            away_team: None,
            season: None,
        }
    }

    /// Sets the home team.
    #[must_use]
    pub fn with_home_team(mut self, team: RecordId) -> Self {
        self.home_team = Some(team);
        self
    }

    /// Sets the away team.
    #[must_use]
    pub fn with_away_team(mut self, team: RecordId) -> Self {
        self.away_team = Some(team);
        self
    }

    /// Sets the season.
    #[must_use]
    pub fn with_season(mut self, season: RecordId) -> Self {
        self.season = Some(season);
        self
    }

    /// Sets the lifecycle state.
    #[must_use]
    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }
}

/// One player's roster slot in one game.
///
/// Mid-game cap swaps are represented by multiple entries for the same
/// player: the exiting entry gets `exited_game_at` set and a new entry is
/// inserted with a higher `roster_order` and the new cap number.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameRoster {
    /// Unique identifier.
    pub id: RecordId,
    /// Cap number worn in this slot.
    pub cap_number: i16,
    /// 1 for the original slot; higher values are swaps.
    pub roster_order: i16,
    /// Whether the slot is the goalie cap.
    pub is_goalie: bool,
    /// Whether the player is on the home side.
    pub is_home_team: bool,
    /// When the player entered the game.
    pub entered_game_at: DateTime<Utc>,
    /// When the player exited; `None` while still in.
    pub exited_game_at: Option<DateTime<Utc>>,
    /// The game this slot belongs to.
    pub game: Option<RecordId>,
    /// The rostered player.
    pub player: Option<RecordId>,
}

impl GameRoster {
    /// Creates an original roster slot entered now.
    #[must_use]
    pub fn new(game: RecordId, player: RecordId, cap_number: i16, is_home_team: bool) -> Self {
        Self {
            id: RecordId::new(),
            cap_number,
            roster_order: 1,
            is_goalie: false,
            is_home_team,
            entered_game_at: Utc::now(),
            exited_game_at: None,
            game: Some(game),
            player: Some(player),
        }
    }

    /// Sets the roster order (used for cap-swap entries).
    #[must_use]
    pub fn with_roster_order(mut self, order: i16) -> Self {
        self.roster_order = order;
        self
    }

    /// Marks the slot as the goalie cap.
    #[must_use]
    pub fn with_goalie(mut self, is_goalie: bool) -> Self {
        self.is_goalie = is_goalie;
        self
    }

    /// True while the player has not exited the game.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.exited_game_at.is_none()
    }
}

/// An in-game event attributed to a player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameEvent {
    /// Unique identifier.
    pub id: RecordId,
    /// What happened.
    pub event_type: EventType,
    /// Period number, starting at 1.
    pub period: i16,
    /// Game-clock time within the period, `"MM:SS"`.
    pub period_time: String,
    /// Wall-clock time the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// The game the event occurred in.
    pub game: Option<RecordId>,
    /// The player the event is attributed to.
    pub player: Option<RecordId>,
}

impl GameEvent {
    /// Creates an event recorded now, not yet attributed to a player.
    #[must_use]
    pub fn new(
        game: RecordId,
        event_type: EventType,
        period: i16,
        period_time: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            event_type,
            period,
            period_time: period_time.into(),
            timestamp: Utc::now(),
            game: Some(game),
            player: None,
        }
    }

    /// Attributes the event to a player.
    #[must_use]
    pub fn with_player(mut self, player: RecordId) -> Self {
        self.player = Some(player);
        self
    }

    /// Sets the recorded wall-clock time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Sum of the six record types held by the store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "entity"))]
pub enum Record {
    /// A [`Team`] record.
    Team(Team),
    /// A [`Season`] record.
    Season(Season),
    /// A [`Player`] record.
    Player(Player),
    /// A [`Game`] record.
    Game(Game),
    /// A [`GameRoster`] record.
    GameRoster(GameRoster),
    /// A [`GameEvent`] record.
    GameEvent(GameEvent),
}

impl Record {
    /// The record's unique identifier.
    #[must_use]
    pub fn id(&self) -> RecordId {
        match self {
            Record::Team(t) => t.id,
            Record::Season(s) => s.id,
            Record::Player(p) => p.id,
            Record::Game(g) => g.id,
            Record::GameRoster(r) => r.id,
            Record::GameEvent(e) => e.id,
        }
    }

    /// The record's kind.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Team(_) => EntityKind::Team,
            Record::Season(_) => EntityKind::Season,
            Record::Player(_) => EntityKind::Player,
            Record::Game(_) => EntityKind::Game,
            Record::GameRoster(_) => EntityKind::GameRoster,
            Record::GameEvent(_) => EntityKind::GameEvent,
        }
    }

    /// Reads a to-one reference field. `None` when the field is absent or
    /// does not belong to this kind.
    #[must_use]
    pub fn reference(&self, field: RefField) -> Option<RecordId> {
        match (self, field) {
            (Record::Player(p), RefField::PlayerTeam) => p.team,
            (Record::Game(g), RefField::GameHomeTeam) => g.home_team,
            (Record::Game(g), RefField::GameAwayTeam) => g.away_team,
            (Record::Game(g), RefField::GameSeason) => g.season,
            (Record::GameEvent(e), RefField::EventGame) => e.game,
            (Record::GameEvent(e), RefField::EventPlayer) => e.player,
            (Record::GameRoster(r), RefField::RosterGame) => r.game,
            (Record::GameRoster(r), RefField::RosterPlayer) => r.player,
            _ => None,
        }
    }

    /// Clears a to-one reference field. No-op when the field does not
    /// belong to this kind.
    pub(crate) fn clear_reference(&mut self, field: RefField) {
        match (self, field) {
            (Record::Player(p), RefField::PlayerTeam) => p.team = None,
            (Record::Game(g), RefField::GameHomeTeam) => g.home_team = None,
            (Record::Game(g), RefField::GameAwayTeam) => g.away_team = None,
            (Record::Game(g), RefField::GameSeason) => g.season = None,
            (Record::GameEvent(e), RefField::EventGame) => e.game = None,
            (Record::GameEvent(e), RefField::EventPlayer) => e.player = None,
            (Record::GameRoster(r), RefField::RosterGame) => r.game = None,
            (Record::GameRoster(r), RefField::RosterPlayer) => r.player = None,
            _ => {}
        }
    }

    /// Borrows the team, if this record is one.
    #[must_use]
    pub fn as_team(&self) -> Option<&Team> {
        match self {
            Record::Team(t) => Some(t),
            _ => None,
        }
    }

    /// Borrows the season, if this record is one.
    #[must_use]
    pub fn as_season(&self) -> Option<&Season> {
        match self {
            Record::Season(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the player, if this record is one.
    #[must_use]
    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Record::Player(p) => Some(p),
            _ => None,
        }
    }

    /// Borrows the game, if this record is one.
    #[must_use]
    pub fn as_game(&self) -> Option<&Game> {
        match self {
            Record::Game(g) => Some(g),
            _ => None,
        }
    }

    /// Borrows the roster entry, if this record is one.
    #[must_use]
    pub fn as_roster(&self) -> Option<&GameRoster> {
        match self {
            Record::GameRoster(r) => Some(r),
            _ => None,
        }
    }

    /// Borrows the event, if this record is one.
    #[must_use]
    pub fn as_event(&self) -> Option<&GameEvent> {
        match self {
            Record::GameEvent(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Team> for Record {
    fn from(t: Team) -> Self {
        Record::Team(t)
    }
}

impl From<Season> for Record {
    fn from(s: Season) -> Self {
        Record::Season(s)
    }
}

impl From<Player> for Record {
    fn from(p: Player) -> Self {
        Record::Player(p)
    }
}

impl From<Game> for Record {
    fn from(g: Game) -> Self {
        Record::Game(g)
    }
}

impl From<GameRoster> for Record {
    fn from(r: GameRoster) -> Self {
        Record::GameRoster(r)
    }
}

impl From<GameEvent> for Record {
    fn from(e: GameEvent) -> Self {
        Record::GameEvent(e)
    }
}
