use chrono::Utc;
use entity::sea_orm_active_enums::ActivityType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ActivityLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        user_id: i32,
        league_id: Option<i32>,
        action_type: ActivityType,
        description: String,
        metadata: serde_json::Value,
    ) -> Result<entity::activity_log::Model, DbErr> {
        let entry = entity::activity_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            league_id: ActiveValue::Set(league_id),
            action_type: ActiveValue::Set(action_type),
            description: ActiveValue::Set(description),
            metadata: ActiveValue::Set(metadata),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Activity of a league, oldest first
    pub async fn find_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::activity_log::Model>, DbErr> {
        entity::prelude::ActivityLog::find()
            .filter(entity::activity_log::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::activity_log::Column::Id)
            .all(self.db)
            .await
    }
}
