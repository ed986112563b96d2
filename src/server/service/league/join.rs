use chrono::Utc;
use entity::sea_orm_active_enums::ActivityType;
use sea_orm::TransactionTrait;
use serde_json::json;

use crate::{
    model::league::{JoinLeagueResponseDto, JoinedMembershipDto},
    server::{
        data::{
            activity_log::ActivityLogRepository,
            league::LeagueRepository,
            membership::{MembershipRepository, NewMembership},
            notification::NotificationRepository,
        },
        error::{league::LeagueError, Error},
        identity::Principal,
        service::user::{email_local_part, UserService},
    },
};

use super::LeagueService;

impl<'a> LeagueService<'a> {
    /// Adds the caller to a league
    ///
    /// Checks run in this order: league exists, caller not yet a member, league has room,
    /// league still open. The membership insert, member counter increment, activity entry and
    /// invitation read-marking then happen in one transaction. The increment only applies
    /// while `current_members < max_members` and the status is open, so a join racing past
    /// the pre-checks is rolled back as full or closed.
    ///
    /// # Returns
    /// - `Ok(JoinLeagueResponseDto)` - The created membership
    /// - `Err(LeagueError::NotFound)` - No league with `league_id`
    /// - `Err(LeagueError::AlreadyMember)` - Caller already belongs to the league
    /// - `Err(LeagueError::Full)` - No member slot left
    /// - `Err(LeagueError::NotAcceptingMembers)` - Draft already started or league completed
    pub async fn join_league(
        &self,
        principal: &Principal,
        league_id: i32,
    ) -> Result<JoinLeagueResponseDto, Error> {
        let user = UserService::new(self.db)
            .get_or_create_by_principal(principal)
            .await?;

        let league = LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .ok_or(LeagueError::NotFound(league_id))?;

        if MembershipRepository::new(self.db)
            .find(league_id, user.id)
            .await?
            .is_some()
        {
            return Err(LeagueError::AlreadyMember(league_id).into());
        }
        if league.current_members >= league.max_members {
            return Err(LeagueError::Full(league_id).into());
        }
        if !league.status.accepts_members() {
            return Err(LeagueError::NotAcceptingMembers(league_id).into());
        }

        let display_name = user
            .display_name
            .clone()
            .filter(|name| !name.is_empty());
        let team_name = format!(
            "{}'s Team",
            display_name
                .as_deref()
                .unwrap_or_else(|| email_local_part(&user.email))
        );

        let txn = self.db.begin().await?;

        let membership = match MembershipRepository::new(&txn)
            .create(NewMembership {
                league_id,
                user_id: user.id,
                team_name,
                is_admin: false,
                remaining_budget: league.budget_limit,
            })
            .await
        {
            Ok(membership) => membership,
            Err(err) => {
                txn.rollback().await?;

                // Unique (league_id, user_id) index hit by a concurrent join of the same user
                if MembershipRepository::new(self.db)
                    .find(league_id, user.id)
                    .await?
                    .is_some()
                {
                    return Err(LeagueError::AlreadyMember(league_id).into());
                }

                return Err(err.into());
            }
        };

        let league_repo = LeagueRepository::new(&txn);
        if !league_repo.try_claim_member_slot(league_id).await? {
            let current = league_repo.find_by_id(league_id).await?;
            txn.rollback().await?;

            return Err(match current {
                Some(current) if !current.status.accepts_members() => {
                    LeagueError::NotAcceptingMembers(league_id)
                }
                Some(_) => LeagueError::Full(league_id),
                None => LeagueError::NotFound(league_id),
            }
            .into());
        }

        ActivityLogRepository::new(&txn)
            .record(
                user.id,
                Some(league_id),
                ActivityType::LeagueJoin,
                format!(
                    "{} joined the league",
                    display_name.as_deref().unwrap_or(&user.email)
                ),
                json!({ "action": "league_join", "membershipId": membership.id }),
            )
            .await?;

        NotificationRepository::new(&txn)
            .mark_league_invites_read(user.id, league_id, Utc::now().naive_utc())
            .await?;

        txn.commit().await?;

        tracing::info!(league_id = %league_id, user_id = %user.id, "User joined league");

        Ok(JoinLeagueResponseDto {
            success: true,
            message: "Successfully joined the league!".to_string(),
            membership: JoinedMembershipDto {
                id: membership.id,
                team_name: membership.team_name,
                league_id,
            },
        })
    }
}
