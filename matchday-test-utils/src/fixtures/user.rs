use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use entity::sea_orm_active_enums::NewsFrequency;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose display name is the local part of `email`.
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let display_name = email.split('@').next().unwrap_or(email).to_string();

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            username: ActiveValue::Set(None),
            display_name: ActiveValue::Set(Some(display_name)),
            avatar_url: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            country_code: ActiveValue::Set(None),
            timezone: ActiveValue::Set(None),
            preferred_language: ActiveValue::Set(None),
            email_verified: ActiveValue::Set(true),
            is_premium: ActiveValue::Set(false),
            premium_expires_at: ActiveValue::Set(None),
            total_experience_points: ActiveValue::Set(0),
            reputation_score: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_active_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a user with a username set.
    pub async fn insert_user_with_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<entity::user::Model, TestError> {
        let user = self.insert_user(email).await?;

        Ok(entity::prelude::User::update(entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user.id),
            username: ActiveValue::Set(Some(username.to_string())),
            ..Default::default()
        })
        .exec(&self.setup.db)
        .await?)
    }

    pub async fn insert_preferences(
        &self,
        user_id: i32,
        has_completed_onboarding: bool,
    ) -> Result<entity::user_preferences::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::UserPreferences::insert(entity::user_preferences::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                has_completed_onboarding: ActiveValue::Set(has_completed_onboarding),
                news_frequency: ActiveValue::Set(NewsFrequency::Daily),
                notifications_enabled: ActiveValue::Set(true),
                email_notifications: ActiveValue::Set(true),
                push_notifications: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_team(
        &self,
        user_id: i32,
        team_id: &str,
        priority: i32,
    ) -> Result<entity::user_favorite_team::Model, TestError> {
        Ok(
            entity::prelude::UserFavoriteTeam::insert(entity::user_favorite_team::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                team_id: ActiveValue::Set(team_id.to_string()),
                priority: ActiveValue::Set(priority),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
