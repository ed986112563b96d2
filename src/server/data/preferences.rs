use chrono::Utc;
use entity::sea_orm_active_enums::NewsFrequency;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Settings captured by the onboarding flow.
#[derive(Debug, Clone, Copy)]
pub struct OnboardingSettings {
    pub news_frequency: NewsFrequency,
    pub notifications_enabled: bool,
}

pub struct PreferencesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferencesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_preferences::Model>, DbErr> {
        entity::prelude::UserPreferences::find()
            .filter(entity::user_preferences::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Creates or updates the user's preferences and marks onboarding complete
    ///
    /// Email and push notifications follow `notifications_enabled`.
    pub async fn upsert_completed(
        &self,
        user_id: i32,
        settings: OnboardingSettings,
    ) -> Result<entity::user_preferences::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.find_by_user(user_id).await? {
            Some(existing) => {
                let mut preferences = existing.into_active_model();
                preferences.has_completed_onboarding = ActiveValue::Set(true);
                preferences.news_frequency = ActiveValue::Set(settings.news_frequency);
                preferences.notifications_enabled = ActiveValue::Set(settings.notifications_enabled);
                preferences.email_notifications = ActiveValue::Set(settings.notifications_enabled);
                preferences.push_notifications = ActiveValue::Set(settings.notifications_enabled);
                preferences.updated_at = ActiveValue::Set(now);

                preferences.update(self.db).await
            }
            None => {
                let preferences = entity::user_preferences::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    has_completed_onboarding: ActiveValue::Set(true),
                    news_frequency: ActiveValue::Set(settings.news_frequency),
                    notifications_enabled: ActiveValue::Set(settings.notifications_enabled),
                    email_notifications: ActiveValue::Set(settings.notifications_enabled),
                    push_notifications: ActiveValue::Set(settings.notifications_enabled),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                preferences.insert(self.db).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::NewsFrequency;
    use matchday_test_utils::prelude::*;

    use crate::server::data::preferences::{OnboardingSettings, PreferencesRepository};

    /// Expect a completed preferences row on first save
    #[tokio::test]
    async fn inserts_when_absent() -> Result<(), TestError> {
        let test = test_setup_with_league_tables!()?;
        let user = test.user().insert_user("fan@example.com").await?;

        let preferences_repo = PreferencesRepository::new(&test.db);
        let preferences = preferences_repo
            .upsert_completed(
                user.id,
                OnboardingSettings {
                    news_frequency: NewsFrequency::Weekly,
                    notifications_enabled: false,
                },
            )
            .await?;

        assert!(preferences.has_completed_onboarding);
        assert_eq!(preferences.news_frequency, NewsFrequency::Weekly);
        assert!(!preferences.email_notifications);
        assert!(!preferences.push_notifications);

        Ok(())
    }

    /// Expect the existing row to be updated in place
    #[tokio::test]
    async fn updates_existing_row() -> Result<(), TestError> {
        let test = test_setup_with_league_tables!()?;
        let user = test.user().insert_user("fan@example.com").await?;
        let existing = test.user().insert_preferences(user.id, false).await?;

        let preferences_repo = PreferencesRepository::new(&test.db);
        let preferences = preferences_repo
            .upsert_completed(
                user.id,
                OnboardingSettings {
                    news_frequency: NewsFrequency::Instant,
                    notifications_enabled: true,
                },
            )
            .await?;

        assert_eq!(preferences.id, existing.id);
        assert!(preferences.has_completed_onboarding);
        assert_eq!(preferences.news_frequency, NewsFrequency::Instant);

        Ok(())
    }
}
