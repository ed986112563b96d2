//! Static league and club catalog.
//!
//! The catalog is compiled into the binary and never mutated, so lookups hand out `'static`
//! references. Startup seeds the same data into the `competition` and `team` tables.

mod teams;

use crate::model::team::{LeagueInfoDto, TeamInfoDto};

/// Season recorded on seeded competitions.
pub static CURRENT_SEASON: &str = "2024-25";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub logo_url: &'static str,
    /// Display name of the domestic league
    pub league: &'static str,
    pub league_id: &'static str,
    pub country: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: Option<&'static str>,
}

static LEAGUES: [LeagueInfo; 5] = [
    LeagueInfo {
        id: "premier-league",
        name: "Premier League",
        country: "England",
    },
    LeagueInfo {
        id: "la-liga",
        name: "La Liga",
        country: "Spain",
    },
    LeagueInfo {
        id: "serie-a",
        name: "Serie A",
        country: "Italy",
    },
    LeagueInfo {
        id: "bundesliga",
        name: "Bundesliga",
        country: "Germany",
    },
    LeagueInfo {
        id: "ligue-1",
        name: "Ligue 1",
        country: "France",
    },
];

pub fn leagues() -> &'static [LeagueInfo] {
    &LEAGUES
}

pub fn teams() -> &'static [TeamInfo] {
    &teams::TEAMS
}

pub fn league_by_id(league_id: &str) -> Option<&'static LeagueInfo> {
    LEAGUES.iter().find(|league| league.id == league_id)
}

pub fn team_by_id(team_id: &str) -> Option<&'static TeamInfo> {
    teams::TEAMS.iter().find(|team| team.id == team_id)
}

pub fn teams_by_league(league_id: &str) -> Vec<&'static TeamInfo> {
    teams::TEAMS
        .iter()
        .filter(|team| team.league_id == league_id)
        .collect()
}

impl LeagueInfo {
    /// Competition short name: the id truncated to 10 characters, upper-cased.
    pub fn short_name(&self) -> String {
        self.id.chars().take(10).collect::<String>().to_uppercase()
    }
}

impl From<&LeagueInfo> for LeagueInfoDto {
    fn from(league: &LeagueInfo) -> Self {
        Self {
            id: league.id.to_string(),
            name: league.name.to_string(),
            country: league.country.to_string(),
        }
    }
}

impl From<&TeamInfo> for TeamInfoDto {
    fn from(team: &TeamInfo) -> Self {
        Self {
            id: team.id.to_string(),
            name: team.name.to_string(),
            short_name: team.short_name.to_string(),
            logo_url: team.logo_url.to_string(),
            league: team.league.to_string(),
            league_id: team.league_id.to_string(),
            country: team.country.to_string(),
            primary_color: team.primary_color.to_string(),
            secondary_color: team.secondary_color.map(str::to_string),
        }
    }
}
