use std::collections::HashMap;

use crate::{
    model::league::{
        CurrentLeagueUserDto, LeagueDetailDto, LeagueDetailsDto, MembershipSummaryDto,
        MyLeagueDto, PublicLeagueDto, PublicLeaguesQuery, RosterEntryDto, RosterUserDto,
        ScoringRulesDto,
    },
    server::{
        data::{
            league::{LeagueRepository, ScoringRuleRepository},
            membership::MembershipRepository,
        },
        error::{league::LeagueError, Error},
        identity::Principal,
        model::db::{LeagueMembershipModel, UserModel},
        service::user::UserService,
    },
};

use super::{league_dto, LeagueService};

pub const DEFAULT_PUBLIC_LIMIT: u64 = 20;
pub const MAX_PUBLIC_LIMIT: u64 = 100;

impl<'a> LeagueService<'a> {
    /// Leagues the caller belongs to, newest first, each with its member list
    pub async fn my_leagues(&self, principal: &Principal) -> Result<Vec<MyLeagueDto>, Error> {
        let user = UserService::new(self.db).require_user(principal).await?;

        let membership_repo = MembershipRepository::new(self.db);
        let league_ids = membership_repo.league_ids_for_user(user.id).await?;
        let leagues = LeagueRepository::new(self.db)
            .find_many_newest_first(league_ids.clone())
            .await?;

        let mut members: HashMap<i32, Vec<MembershipSummaryDto>> = HashMap::new();
        for (membership, member) in membership_repo
            .find_by_leagues_with_users(league_ids)
            .await?
        {
            let member = member.ok_or_else(|| missing_member(&membership))?;

            members
                .entry(membership.league_id)
                .or_default()
                .push(MembershipSummaryDto {
                    id: membership.id,
                    team_name: membership.team_name,
                    total_points: membership.total_points,
                    gameweek_points: membership.gameweek_points,
                    league_position: membership.league_position,
                    user: (&member).into(),
                });
        }

        let related = self.related(&leagues).await?;

        let mut my_leagues = Vec::with_capacity(leagues.len());
        for league in leagues {
            let creator = related.creator(&league)?;
            let competition = related.competition(&league)?;
            let memberships = members.remove(&league.id).unwrap_or_default();

            my_leagues.push(MyLeagueDto {
                member_count: memberships.len() as u64,
                memberships,
                league: league_dto(league, creator, competition),
            });
        }

        Ok(my_leagues)
    }

    /// Full league view for one of its members
    ///
    /// # Returns
    /// - `Err(LeagueError::NotFound)` - No league with `league_id`
    /// - `Err(LeagueError::NotMember)` - Caller is not part of the league
    pub async fn league_details(
        &self,
        principal: &Principal,
        league_id: i32,
    ) -> Result<LeagueDetailsDto, Error> {
        let user = UserService::new(self.db).require_user(principal).await?;

        let league = LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .ok_or(LeagueError::NotFound(league_id))?;

        let membership_repo = MembershipRepository::new(self.db);
        let membership = membership_repo
            .find(league_id, user.id)
            .await?
            .ok_or(LeagueError::NotMember(league_id))?;

        let mut roster = Vec::new();
        for (entry, member) in membership_repo.roster(league_id).await? {
            let member = member.ok_or_else(|| missing_member(&entry))?;

            roster.push(roster_entry(entry, member));
        }

        let scoring_rules = ScoringRuleRepository::new(self.db)
            .find_by_league(league_id)
            .await?
            .map(|rules| ScoringRulesDto {
                goal_points: rules.goal_points,
                assist_points: rules.assist_points,
                clean_sheet_gk_points: rules.clean_sheet_gk_points,
                yellow_card_points: rules.yellow_card_points,
                red_card_points: rules.red_card_points,
            });

        let related = self.related(std::slice::from_ref(&league)).await?;
        let creator = related.creator(&league)?;
        let competition = related.competition(&league)?;

        let current_user = CurrentLeagueUserDto {
            id: user.id,
            email: user.email,
            is_league_admin: membership.is_admin,
            is_league_creator: league.creator_id == user.id,
        };

        Ok(LeagueDetailsDto {
            league: LeagueDetailDto {
                id: league.id,
                name: league.name,
                description: league.description,
                creator_id: league.creator_id,
                current_members: league.current_members,
                max_members: league.max_members,
                budget_limit: league.budget_limit,
                squad_size: league.squad_size,
                status: league.status,
                league_type: league.league_type,
                selection_method: league.selection_method,
                has_playoffs: league.has_playoffs,
                created_at: league.created_at.and_utc(),
                competition: competition.into(),
                creator: creator.into(),
                memberships: roster,
                scoring_rules,
            },
            current_user,
        })
    }

    /// Open public leagues with a free slot
    ///
    /// `limit` (clamped to 1..=100) bounds the rows fetched before full leagues are dropped,
    /// so fewer than `limit` leagues may be returned.
    pub async fn public_leagues(
        &self,
        query: PublicLeaguesQuery,
    ) -> Result<Vec<PublicLeagueDto>, Error> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PUBLIC_LIMIT)
            .clamp(1, MAX_PUBLIC_LIMIT);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let leagues: Vec<_> = LeagueRepository::new(self.db)
            .find_public(search, limit)
            .await?
            .into_iter()
            .filter(|league| league.current_members < league.max_members)
            .collect();

        let related = self.related(&leagues).await?;

        let mut public = Vec::with_capacity(leagues.len());
        for league in leagues {
            let creator = related.creator(&league)?;
            let competition = related.competition(&league)?;

            public.push(PublicLeagueDto {
                id: league.id,
                name: league.name,
                description: league.description,
                current_members: league.current_members,
                max_members: league.max_members,
                status: league.status,
                league_type: league.league_type,
                competition: competition.into(),
                creator: creator.into(),
                created_at: league.created_at.and_utc(),
            });
        }

        Ok(public)
    }
}

fn missing_member(membership: &LeagueMembershipModel) -> Error {
    Error::InternalError(format!(
        "User ID {} of membership ID {} not found",
        membership.user_id, membership.id
    ))
}

fn roster_entry(entry: LeagueMembershipModel, member: UserModel) -> RosterEntryDto {
    RosterEntryDto {
        id: entry.id,
        user_id: entry.user_id,
        team_name: entry.team_name,
        total_points: entry.total_points,
        gameweek_points: entry.gameweek_points,
        league_position: entry.league_position,
        is_admin: entry.is_admin,
        joined_at: entry.joined_at.and_utc(),
        user: RosterUserDto {
            id: member.id,
            display_name: member.display_name,
            email: member.email,
            total_experience_points: member.total_experience_points,
        },
    }
}
