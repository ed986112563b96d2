//! League lifecycle service.
//!
//! Covers creating, joining, browsing, inviting to and starting the draft of fantasy leagues.
//! Operations touching more than one row run inside a single transaction, and membership
//! capacity is enforced by a conditional update so concurrent joins can never overfill a
//! league.

mod create;
mod draft;
mod invite;
mod join;
mod query;

#[cfg(test)]
mod tests;

pub use invite::{InviteOutcome, InviteTarget};

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        league::{CompetitionSummaryDto, LeagueDto},
        user::UserSummaryDto,
    },
    server::{
        data::{reference::CompetitionRepository, user::UserRepository},
        error::Error,
        model::db::{CompetitionModel, FantasyLeagueModel, UserModel},
    },
};

pub struct LeagueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueService<'a> {
    /// Creates a new instance of [`LeagueService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the creators and competitions referenced by `leagues`
    async fn related(&self, leagues: &[FantasyLeagueModel]) -> Result<LeagueRelations, Error> {
        let mut creator_ids: Vec<i32> = leagues.iter().map(|l| l.creator_id).collect();
        creator_ids.sort_unstable();
        creator_ids.dedup();

        let mut competition_ids: Vec<String> =
            leagues.iter().map(|l| l.competition_id.clone()).collect();
        competition_ids.sort_unstable();
        competition_ids.dedup();

        let creators = UserRepository::new(self.db).find_many(&creator_ids).await?;
        let competitions = CompetitionRepository::new(self.db)
            .find_many(competition_ids)
            .await?;

        Ok(LeagueRelations {
            creators: creators.into_iter().map(|u| (u.id, u)).collect(),
            competitions: competitions.into_iter().map(|c| (c.id.clone(), c)).collect(),
        })
    }
}

struct LeagueRelations {
    creators: HashMap<i32, UserModel>,
    competitions: HashMap<String, CompetitionModel>,
}

impl LeagueRelations {
    fn creator(&self, league: &FantasyLeagueModel) -> Result<&UserModel, Error> {
        self.creators.get(&league.creator_id).ok_or_else(|| {
            Error::InternalError(format!(
                "Creator user ID {} of league ID {} not found",
                league.creator_id, league.id
            ))
        })
    }

    fn competition(&self, league: &FantasyLeagueModel) -> Result<&CompetitionModel, Error> {
        self.competitions.get(&league.competition_id).ok_or_else(|| {
            Error::InternalError(format!(
                "Competition {} of league ID {} not found",
                league.competition_id, league.id
            ))
        })
    }
}

impl From<&CompetitionModel> for CompetitionSummaryDto {
    fn from(competition: &CompetitionModel) -> Self {
        Self {
            id: competition.id.clone(),
            name: competition.name.clone(),
            short_name: competition.short_name.clone(),
            country: competition.country.clone(),
            logo_url: competition.logo_url.clone(),
        }
    }
}

fn league_dto(
    league: FantasyLeagueModel,
    creator: &UserModel,
    competition: &CompetitionModel,
) -> LeagueDto {
    LeagueDto {
        id: league.id,
        name: league.name,
        description: league.description,
        creator_id: league.creator_id,
        competition_id: league.competition_id,
        league_type: league.league_type,
        status: league.status,
        selection_method: league.selection_method,
        max_members: league.max_members,
        current_members: league.current_members,
        budget_limit: league.budget_limit,
        entry_fee: league.entry_fee,
        prize_pool: league.prize_pool,
        squad_size: league.squad_size,
        has_playoffs: league.has_playoffs,
        draft_started_at: league.draft_started_at.map(|at| at.and_utc()),
        created_at: league.created_at.and_utc(),
        updated_at: league.updated_at.and_utc(),
        creator: UserSummaryDto::from(creator),
        competition: CompetitionSummaryDto::from(competition),
    }
}
