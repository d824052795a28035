//! Typed finders over the store.
//!
//! Kind-wide iterators are lazy and restartable; the named finders return
//! sorted `Vec`s mirroring the fetch orderings the rest of the app relies
//! on. Relation-scoped finders go through the reverse index rather than
//! scanning the arena.

use polostats_foundation::{RecordId, RecordSet};

use crate::model::{Game, GameEvent, GameRoster, GameStatus, Player, Record, Season, Team};
use crate::schema::RefField;
use crate::store::EntityStore;

impl EntityStore {
    /// Iterates all teams in id order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.records().filter_map(Record::as_team)
    }

    /// Iterates all seasons in id order.
    pub fn seasons(&self) -> impl Iterator<Item = &Season> {
        self.records().filter_map(Record::as_season)
    }

    /// Iterates all players in id order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.records().filter_map(Record::as_player)
    }

    /// Iterates all games in id order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.records().filter_map(Record::as_game)
    }

    /// Active teams, sorted by club name then squad name.
    #[must_use]
    pub fn active_teams(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams().filter(|t| t.is_active).collect();
        teams.sort_by(|a, b| {
            a.club_name
                .cmp(&b.club_name)
                .then_with(|| a.name.cmp(&b.name))
        });
        teams
    }

    /// Players on a team, sorted by name.
    #[must_use]
    pub fn players_on_team(&self, team: RecordId) -> Vec<&Player> {
        let mut players: Vec<&Player> = self
            .sources(team, RefField::PlayerTeam)
            .filter_map(|id| self.player(id))
            .collect();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        players
    }

    /// Games a team appears in on either side, sorted by date ascending.
    ///
    /// A game with the team on both sides is listed once.
    #[must_use]
    pub fn games_for_team(&self, team: RecordId) -> Vec<&Game> {
        let ids: RecordSet = self
            .sources(team, RefField::GameHomeTeam)
            .chain(self.sources(team, RefField::GameAwayTeam))
            .collect();
        let mut games: Vec<&Game> = ids.iter().filter_map(|id| self.game(*id)).collect();
        games.sort_by(|a, b| a.date.cmp(&b.date));
        games
    }

    /// Games in a season, sorted by date ascending.
    #[must_use]
    pub fn games_in_season(&self, season: RecordId) -> Vec<&Game> {
        let mut games: Vec<&Game> = self
            .sources(season, RefField::GameSeason)
            .filter_map(|id| self.game(id))
            .collect();
        games.sort_by(|a, b| a.date.cmp(&b.date));
        games
    }

    /// Games in a lifecycle state, sorted by date descending (most recent
    /// first).
    #[must_use]
    pub fn games_with_status(&self, status: GameStatus) -> Vec<&Game> {
        let mut games: Vec<&Game> = self.games().filter(|g| g.status == status).collect();
        games.sort_by(|a, b| b.date.cmp(&a.date));
        games
    }

    /// All seasons, most recent year first.
    #[must_use]
    pub fn seasons_by_year(&self) -> Vec<&Season> {
        let mut seasons: Vec<&Season> = self.seasons().collect();
        seasons.sort_by(|a, b| b.year.cmp(&a.year));
        seasons
    }

    /// The active season, if one is marked. The most recent year wins when
    /// several are.
    #[must_use]
    pub fn active_season(&self) -> Option<&Season> {
        self.seasons_by_year().into_iter().find(|s| s.is_active)
    }

    /// Roster entries of a game, in bench order.
    #[must_use]
    pub fn rosters_for_game(&self, game: RecordId) -> Vec<&GameRoster> {
        let mut rosters: Vec<&GameRoster> = self
            .sources(game, RefField::RosterGame)
            .filter_map(|id| self.roster(id))
            .collect();
        rosters.sort_by(|a, b| {
            a.roster_order
                .cmp(&b.roster_order)
                .then_with(|| a.cap_number.cmp(&b.cap_number))
        });
        rosters
    }

    /// Roster entries of a player across games, earliest entry first.
    #[must_use]
    pub fn rosters_for_player(&self, player: RecordId) -> Vec<&GameRoster> {
        let mut rosters: Vec<&GameRoster> = self
            .sources(player, RefField::RosterPlayer)
            .filter_map(|id| self.roster(id))
            .collect();
        rosters.sort_by(|a, b| a.entered_game_at.cmp(&b.entered_game_at));
        rosters
    }

    /// Events of a game in recorded order.
    #[must_use]
    pub fn events_for_game(&self, game: RecordId) -> Vec<&GameEvent> {
        let mut events: Vec<&GameEvent> = self
            .sources(game, RefField::EventGame)
            .filter_map(|id| self.event(id))
            .collect();
        events.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        events
    }

    /// Events attributed to a player, in recorded order.
    #[must_use]
    pub fn events_for_player(&self, player: RecordId) -> Vec<&GameEvent> {
        let mut events: Vec<&GameEvent> = self
            .sources(player, RefField::EventPlayer)
            .filter_map(|id| self.event(id))
            .collect();
        events.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        events
    }

    /// Events attributed to a player, restricted to games of one season.
    #[must_use]
    pub fn events_for_player_in_season(
        &self,
        player: RecordId,
        season: RecordId,
    ) -> Vec<&GameEvent> {
        self.events_for_player(player)
            .into_iter()
            .filter(|event| {
                event
                    .game
                    .and_then(|id| self.game(id))
                    .is_some_and(|game| game.season == Some(season))
            })
            .collect()
    }
}
