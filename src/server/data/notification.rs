use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

/// Invitation to join a league, addressed to an existing user.
#[derive(Debug, Clone)]
pub struct LeagueInvite {
    pub user_id: i32,
    pub league_id: i32,
    pub inviter_id: i32,
    pub title: String,
    pub content: String,
    pub action_url: String,
}

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_league_invite(
        &self,
        invite: LeagueInvite,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(invite.user_id),
            notification_type: ActiveValue::Set(NotificationType::LeagueInvite),
            title: ActiveValue::Set(invite.title),
            content: ActiveValue::Set(invite.content),
            league_id: ActiveValue::Set(Some(invite.league_id)),
            related_user_id: ActiveValue::Set(Some(invite.inviter_id)),
            action_url: ActiveValue::Set(Some(invite.action_url)),
            is_read: ActiveValue::Set(false),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    /// Tells each member that the league's draft has started
    pub async fn notify_draft_started(
        &self,
        member_ids: &[i32],
        league_id: i32,
        league_name: &str,
        started_by: i32,
    ) -> Result<(), DbErr> {
        if member_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let notifications = member_ids
            .iter()
            .map(|member_id| entity::notification::ActiveModel {
                user_id: ActiveValue::Set(*member_id),
                notification_type: ActiveValue::Set(NotificationType::DraftStarted),
                title: ActiveValue::Set("Draft Started".to_string()),
                content: ActiveValue::Set(format!("The draft for \"{}\" has started", league_name)),
                league_id: ActiveValue::Set(Some(league_id)),
                related_user_id: ActiveValue::Set(Some(started_by)),
                action_url: ActiveValue::Set(Some(format!("/leagues/{}", league_id))),
                is_read: ActiveValue::Set(false),
                read_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Notification::insert_many(notifications)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks the user's unread invitations to a league as read
    ///
    /// Returns the number of notifications updated.
    pub async fn mark_league_invites_read(
        &self,
        user_id: i32,
        league_id: i32,
        read_at: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .col_expr(entity::notification::Column::ReadAt, Expr::value(Some(read_at)))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::LeagueId.eq(league_id))
            .filter(
                entity::notification::Column::NotificationType.eq(NotificationType::LeagueInvite),
            )
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
