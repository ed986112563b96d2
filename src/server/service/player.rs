use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::player::{
        CompetitionRefDto, PaginationDto, PlayerDto, PlayerTeamDto, PlayersPageDto, PlayersQuery,
    },
    server::{
        data::{
            player::{PlayerFilters, PlayerRepository},
            reference::CompetitionRepository,
        },
        error::Error,
    },
};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new instance of [`PlayerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of active players with their team and competition
    ///
    /// Pages are 1-based; out of range page and limit values are clamped rather than
    /// rejected.
    pub async fn list(&self, query: PlayersQuery) -> Result<PlayersPageDto, Error> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let limit = query
            .limit
            .map(|l| l.clamp(1, MAX_PAGE_SIZE as i64) as u64)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let filters = PlayerFilters {
            search: query.search.filter(|s| !s.trim().is_empty()),
            position: query.position,
            team_id: query.team_id.filter(|t| !t.is_empty()),
        };

        let player_repo = PlayerRepository::new(self.db);
        let total_count = player_repo.count(&filters).await?;
        let rows = player_repo.find_page(&filters, page - 1, limit).await?;

        let mut competition_ids: Vec<String> = rows
            .iter()
            .filter_map(|(_, team)| team.as_ref().map(|t| t.competition_id.clone()))
            .collect();
        competition_ids.sort_unstable();
        competition_ids.dedup();

        let competitions: HashMap<String, CompetitionRefDto> = CompetitionRepository::new(self.db)
            .find_many(competition_ids)
            .await?
            .into_iter()
            .map(|c| {
                (
                    c.id.clone(),
                    CompetitionRefDto {
                        id: c.id,
                        name: c.name,
                        short_name: c.short_name,
                    },
                )
            })
            .collect();

        let mut players = Vec::with_capacity(rows.len());
        for (player, team) in rows {
            let team = team.ok_or_else(|| {
                Error::InternalError(format!(
                    "Team {} of player ID {} not found",
                    player.team_id, player.id
                ))
            })?;
            let competition = competitions.get(&team.competition_id).cloned().ok_or_else(|| {
                Error::InternalError(format!(
                    "Competition {} of team {} not found",
                    team.competition_id, team.id
                ))
            })?;

            players.push(PlayerDto {
                id: player.id,
                team_id: player.team_id,
                name: player.name,
                position: player.position,
                shirt_number: player.shirt_number,
                nationality: player.nationality,
                market_value_euros: player.market_value_euros,
                is_active: player.is_active,
                created_at: player.created_at.and_utc(),
                team: PlayerTeamDto {
                    id: team.id,
                    name: team.name,
                    short_name: team.short_name,
                    logo_url: team.logo_url,
                    competition,
                },
            });
        }

        Ok(PlayersPageDto {
            players,
            pagination: PaginationDto {
                page,
                limit,
                total_count,
                total_pages: total_count.div_ceil(limit),
            },
        })
    }
}
