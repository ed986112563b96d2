use entity::sea_orm_active_enums::{ActivityType, LeagueType, SelectionMethod};
use sea_orm::TransactionTrait;
use serde_json::json;

use crate::{
    model::league::{CreateLeagueDto, LeagueDto},
    server::{
        data::{
            activity_log::ActivityLogRepository,
            league::{LeagueRepository, NewLeague, ScoringRuleRepository},
            membership::{MembershipRepository, NewMembership},
            reference::CompetitionRepository,
        },
        error::{league::LeagueError, Error},
        identity::Principal,
        service::user::{email_local_part, UserService},
    },
};

use super::{league_dto, LeagueService};

pub const DEFAULT_MAX_MEMBERS: i32 = 12;
/// Minor currency units
pub const DEFAULT_BUDGET_LIMIT: i64 = 100_000_000;
pub const DEFAULT_SQUAD_SIZE: i32 = 15;

impl<'a> LeagueService<'a> {
    /// Creates a league with the caller as its first member and admin
    ///
    /// The league row, the creator's membership, the default scoring rules and the activity
    /// entry are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(LeagueDto)` - The new league with its creator and competition
    /// - `Err(LeagueError::MissingRequiredFields)` - Blank name or competition
    /// - `Err(LeagueError::CompetitionNotFound)` - Unknown competition id
    /// - `Err(LeagueError::InvalidMaxMembers | InvalidSquadSize | NegativeAmount)` - Invalid settings
    pub async fn create_league(
        &self,
        principal: &Principal,
        request: CreateLeagueDto,
    ) -> Result<LeagueDto, Error> {
        let name = request.name.as_deref().map(str::trim).unwrap_or_default();
        let competition_id = request
            .competition_id
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        if name.is_empty() || competition_id.is_empty() {
            return Err(LeagueError::MissingRequiredFields.into());
        }

        let max_members = request.max_members.unwrap_or(DEFAULT_MAX_MEMBERS);
        if max_members < 2 {
            return Err(LeagueError::InvalidMaxMembers(max_members).into());
        }
        let squad_size = request.squad_size.unwrap_or(DEFAULT_SQUAD_SIZE);
        if squad_size < 1 {
            return Err(LeagueError::InvalidSquadSize(squad_size).into());
        }
        let budget_limit = request.budget_limit.unwrap_or(DEFAULT_BUDGET_LIMIT);
        let entry_fee = request.entry_fee.unwrap_or(0);
        if budget_limit < 0 || entry_fee < 0 {
            return Err(LeagueError::NegativeAmount.into());
        }

        let competition = CompetitionRepository::new(self.db)
            .find_by_id(competition_id)
            .await?
            .ok_or_else(|| LeagueError::CompetitionNotFound(competition_id.to_string()))?;

        let user = UserService::new(self.db)
            .get_or_create_by_principal(principal)
            .await?;

        let txn = self.db.begin().await?;

        let league = LeagueRepository::new(&txn)
            .create(NewLeague {
                name: name.to_string(),
                description: request.description.filter(|d| !d.trim().is_empty()),
                creator_id: user.id,
                competition_id: competition.id.clone(),
                league_type: request.league_type.unwrap_or(LeagueType::Private),
                selection_method: request.selection_method.unwrap_or(SelectionMethod::Auction),
                max_members,
                budget_limit,
                entry_fee,
                squad_size,
                has_playoffs: request.has_playoffs.unwrap_or(true),
            })
            .await?;

        let membership = MembershipRepository::new(&txn)
            .create(NewMembership {
                league_id: league.id,
                user_id: user.id,
                team_name: format!("{}'s Team", email_local_part(&user.email)),
                is_admin: true,
                remaining_budget: league.budget_limit,
            })
            .await?;

        ScoringRuleRepository::new(&txn)
            .create_default(league.id)
            .await?;

        ActivityLogRepository::new(&txn)
            .record(
                user.id,
                Some(league.id),
                ActivityType::LeagueCreate,
                format!("{} created the league", user.display_name.as_deref().unwrap_or(&user.email)),
                json!({ "action": "league_create", "membershipId": membership.id }),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(league_id = %league.id, user_id = %user.id, "League created");

        Ok(league_dto(league, &user, &competition))
    }
}
