use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteTeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Favourite teams of the user by priority, with their team rows
    pub async fn find_by_user_with_team(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::user_favorite_team::Model, Option<entity::team::Model>)>, DbErr> {
        entity::prelude::UserFavoriteTeam::find()
            .filter(entity::user_favorite_team::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Team)
            .order_by_asc(entity::user_favorite_team::Column::Priority)
            .all(self.db)
            .await
    }

    /// Team ids of the user's favourites by priority
    pub async fn team_ids_for_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let favorites = entity::prelude::UserFavoriteTeam::find()
            .filter(entity::user_favorite_team::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_favorite_team::Column::Priority)
            .all(self.db)
            .await?;

        Ok(favorites.into_iter().map(|f| f.team_id).collect())
    }

    /// Replaces the user's favourites with `team_ids`, priority following their order
    pub async fn replace(&self, user_id: i32, team_ids: &[String]) -> Result<(), DbErr> {
        entity::prelude::UserFavoriteTeam::delete_many()
            .filter(entity::user_favorite_team::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if team_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let favorites = team_ids
            .iter()
            .enumerate()
            .map(|(index, team_id)| entity::user_favorite_team::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                team_id: ActiveValue::Set(team_id.clone()),
                priority: ActiveValue::Set(index as i32 + 1),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::UserFavoriteTeam::insert_many(favorites)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
