use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use entity::sea_orm_active_enums::{
    LeagueStatus, LeagueType, NotificationType, SelectionMethod,
};

use crate::{error::TestError, TestContext};

/// Budget given to every fixture league, in minor units.
pub const TEST_BUDGET_LIMIT: i64 = 100_000_000;

impl TestContext {
    pub fn league(&self) -> LeagueFixtures<'_> {
        LeagueFixtures { setup: self }
    }
}

pub struct LeagueFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> LeagueFixtures<'a> {
    /// Insert a private auction league in draft status together with the creator's admin
    /// membership.
    pub async fn insert_league(
        &self,
        creator_id: i32,
        competition_id: &str,
        max_members: i32,
    ) -> Result<entity::fantasy_league::Model, TestError> {
        self.insert_league_with(
            creator_id,
            competition_id,
            max_members,
            LeagueType::Private,
            LeagueStatus::Draft,
        )
        .await
    }

    pub async fn insert_league_with(
        &self,
        creator_id: i32,
        competition_id: &str,
        max_members: i32,
        league_type: LeagueType,
        status: LeagueStatus,
    ) -> Result<entity::fantasy_league::Model, TestError> {
        let now = Utc::now().naive_utc();

        let league = entity::prelude::FantasyLeague::insert(entity::fantasy_league::ActiveModel {
            name: ActiveValue::Set(format!("League of user {}", creator_id)),
            description: ActiveValue::Set(None),
            creator_id: ActiveValue::Set(creator_id),
            competition_id: ActiveValue::Set(competition_id.to_string()),
            league_type: ActiveValue::Set(league_type),
            status: ActiveValue::Set(status),
            selection_method: ActiveValue::Set(SelectionMethod::Auction),
            max_members: ActiveValue::Set(max_members),
            current_members: ActiveValue::Set(1),
            budget_limit: ActiveValue::Set(TEST_BUDGET_LIMIT),
            entry_fee: ActiveValue::Set(0),
            prize_pool: ActiveValue::Set(0),
            squad_size: ActiveValue::Set(15),
            has_playoffs: ActiveValue::Set(true),
            draft_started_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        self.insert_membership(league.id, creator_id, true).await?;

        Ok(league)
    }

    /// Insert a membership row and bump the league's member counter.
    pub async fn insert_member(
        &self,
        league_id: i32,
        user_id: i32,
    ) -> Result<entity::league_membership::Model, TestError> {
        let membership = self.insert_membership(league_id, user_id, false).await?;

        if let Some(league) = entity::prelude::FantasyLeague::find_by_id(league_id)
            .one(&self.setup.db)
            .await?
        {
            entity::prelude::FantasyLeague::update(entity::fantasy_league::ActiveModel {
                id: ActiveValue::Unchanged(league.id),
                current_members: ActiveValue::Set(league.current_members + 1),
                ..Default::default()
            })
            .exec(&self.setup.db)
            .await?;
        }

        Ok(membership)
    }

    async fn insert_membership(
        &self,
        league_id: i32,
        user_id: i32,
        is_admin: bool,
    ) -> Result<entity::league_membership::Model, TestError> {
        Ok(
            entity::prelude::LeagueMembership::insert(entity::league_membership::ActiveModel {
                league_id: ActiveValue::Set(league_id),
                user_id: ActiveValue::Set(user_id),
                team_name: ActiveValue::Set(format!("Team {}", user_id)),
                total_points: ActiveValue::Set(0),
                gameweek_points: ActiveValue::Set(0),
                league_position: ActiveValue::Set(None),
                is_admin: ActiveValue::Set(is_admin),
                remaining_budget: ActiveValue::Set(TEST_BUDGET_LIMIT),
                joined_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an unread league invitation for `user_id`.
    pub async fn insert_invite(
        &self,
        user_id: i32,
        league_id: i32,
        inviter_id: i32,
    ) -> Result<entity::notification::Model, TestError> {
        Ok(
            entity::prelude::Notification::insert(entity::notification::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                notification_type: ActiveValue::Set(NotificationType::LeagueInvite),
                title: ActiveValue::Set("League Invitation".to_string()),
                content: ActiveValue::Set("You've been invited".to_string()),
                league_id: ActiveValue::Set(Some(league_id)),
                related_user_id: ActiveValue::Set(Some(inviter_id)),
                action_url: ActiveValue::Set(None),
                is_read: ActiveValue::Set(false),
                read_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
