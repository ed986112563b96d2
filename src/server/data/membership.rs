use chrono::Utc;
use sea_orm::{
    sea_query::NullOrdering, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

#[derive(Debug, Clone)]
pub struct NewMembership {
    pub league_id: i32,
    pub user_id: i32,
    pub team_name: String,
    pub is_admin: bool,
    pub remaining_budget: i64,
}

pub struct MembershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    /// Creates a new instance of [`MembershipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership with zeroed points
    ///
    /// Fails on the `(league_id, user_id)` unique index when the user is already a member.
    pub async fn create(
        &self,
        membership: NewMembership,
    ) -> Result<entity::league_membership::Model, DbErr> {
        let membership = entity::league_membership::ActiveModel {
            league_id: ActiveValue::Set(membership.league_id),
            user_id: ActiveValue::Set(membership.user_id),
            team_name: ActiveValue::Set(membership.team_name),
            total_points: ActiveValue::Set(0),
            gameweek_points: ActiveValue::Set(0),
            league_position: ActiveValue::Set(None),
            is_admin: ActiveValue::Set(membership.is_admin),
            remaining_budget: ActiveValue::Set(membership.remaining_budget),
            joined_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        membership.insert(self.db).await
    }

    pub async fn find(
        &self,
        league_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::league_membership::Model>, DbErr> {
        entity::prelude::LeagueMembership::find()
            .filter(entity::league_membership::Column::LeagueId.eq(league_id))
            .filter(entity::league_membership::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Ids of every league the user belongs to
    pub async fn league_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::LeagueMembership::find()
            .select_only()
            .column(entity::league_membership::Column::LeagueId)
            .filter(entity::league_membership::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Memberships of the given leagues with their users, in join order
    pub async fn find_by_leagues_with_users(
        &self,
        league_ids: Vec<i32>,
    ) -> Result<Vec<(entity::league_membership::Model, Option<entity::user::Model>)>, DbErr> {
        if league_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LeagueMembership::find()
            .filter(entity::league_membership::Column::LeagueId.is_in(league_ids))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::league_membership::Column::JoinedAt)
            .order_by_asc(entity::league_membership::Column::Id)
            .all(self.db)
            .await
    }

    /// League roster ranked by position, unranked members last, then by total points
    pub async fn roster(
        &self,
        league_id: i32,
    ) -> Result<Vec<(entity::league_membership::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::LeagueMembership::find()
            .filter(entity::league_membership::Column::LeagueId.eq(league_id))
            .find_also_related(entity::prelude::User)
            .order_by_with_nulls(
                entity::league_membership::Column::LeaguePosition,
                Order::Asc,
                NullOrdering::Last,
            )
            .order_by_desc(entity::league_membership::Column::TotalPoints)
            .order_by_asc(entity::league_membership::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use matchday_test_utils::prelude::*;

    async fn setup() -> Result<(TestContext, entity::user::Model, entity::fantasy_league::Model), TestError>
    {
        let test = test_setup_with_league_tables!()?;
        test.reference()
            .insert_competition_if_absent("premier-league")
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let league = test.league().insert_league(owner.id, "premier-league", 6).await?;

        Ok((test, owner, league))
    }

    mod create {
        use matchday_test_utils::prelude::*;

        use super::setup;
        use crate::server::data::membership::{MembershipRepository, NewMembership};

        /// Expect a membership with zeroed points
        #[tokio::test]
        async fn creates_membership() -> Result<(), TestError> {
            let (test, _, league) = setup().await?;
            let fan = test.user().insert_user("fan@example.com").await?;

            let membership_repo = MembershipRepository::new(&test.db);
            let membership = membership_repo
                .create(NewMembership {
                    league_id: league.id,
                    user_id: fan.id,
                    team_name: "fan's Team".to_string(),
                    is_admin: false,
                    remaining_budget: league.budget_limit,
                })
                .await
                .unwrap();

            assert_eq!(membership.total_points, 0);
            assert_eq!(membership.remaining_budget, league.budget_limit);
            assert!(membership.league_position.is_none());

            Ok(())
        }

        /// Expect Error when the user already belongs to the league
        #[tokio::test]
        async fn fails_for_duplicate_membership() -> Result<(), TestError> {
            let (test, owner, league) = setup().await?;

            let membership_repo = MembershipRepository::new(&test.db);
            let result = membership_repo
                .create(NewMembership {
                    league_id: league.id,
                    user_id: owner.id,
                    team_name: "again".to_string(),
                    is_admin: false,
                    remaining_budget: 0,
                })
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod roster {
        use matchday_test_utils::prelude::*;
        use sea_orm::{ActiveValue, EntityTrait};

        use super::setup;
        use crate::server::data::membership::MembershipRepository;

        async fn rank(
            test: &TestContext,
            membership_id: i32,
            position: Option<i32>,
            points: i32,
        ) -> Result<(), TestError> {
            entity::prelude::LeagueMembership::update(entity::league_membership::ActiveModel {
                id: ActiveValue::Unchanged(membership_id),
                league_position: ActiveValue::Set(position),
                total_points: ActiveValue::Set(points),
                ..Default::default()
            })
            .exec(&test.db)
            .await?;

            Ok(())
        }

        /// Expect ranked members first, then unranked members by points
        #[tokio::test]
        async fn orders_by_position_then_points() -> Result<(), TestError> {
            let (test, owner, league) = setup().await?;
            let second = test.user().insert_user("second@example.com").await?;
            let third = test.user().insert_user("third@example.com").await?;
            let owner_membership = MembershipRepository::new(&test.db)
                .find(league.id, owner.id)
                .await?
                .unwrap();
            let second_membership = test.league().insert_member(league.id, second.id).await?;
            let third_membership = test.league().insert_member(league.id, third.id).await?;
            rank(&test, owner_membership.id, None, 10).await?;
            rank(&test, second_membership.id, Some(1), 5).await?;
            rank(&test, third_membership.id, None, 30).await?;

            let roster = MembershipRepository::new(&test.db).roster(league.id).await?;

            let order: Vec<i32> = roster.iter().map(|(m, _)| m.user_id).collect();
            assert_eq!(order, vec![second.id, third.id, owner.id]);
            assert!(roster.iter().all(|(_, user)| user.is_some()));

            Ok(())
        }
    }

    mod league_ids_for_user {
        use matchday_test_utils::prelude::*;

        use super::setup;
        use crate::server::data::membership::MembershipRepository;

        /// Expect every league the user joined or created
        #[tokio::test]
        async fn lists_joined_leagues() -> Result<(), TestError> {
            let (test, owner, league) = setup().await?;
            let fan = test.user().insert_user("fan@example.com").await?;
            let other = test.league().insert_league(fan.id, "premier-league", 6).await?;
            test.league().insert_member(other.id, owner.id).await?;

            let mut ids = MembershipRepository::new(&test.db)
                .league_ids_for_user(owner.id)
                .await?;
            ids.sort();

            assert_eq!(ids, vec![league.id, other.id]);

            Ok(())
        }
    }
}
