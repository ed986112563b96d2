use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

/// Profile fields to overwrite, `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with a verified email
    pub async fn create(
        &self,
        email: &str,
        display_name: &str,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            username: ActiveValue::Set(None),
            display_name: ActiveValue::Set(Some(display_name.to_string())),
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
        };

        user.insert(self.db).await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_many(&self, user_ids: &[i32]) -> Result<Vec<entity::user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Applies profile changes and stamps `last_active_at`
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        changes: ProfileChanges,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut user_am = user.into_active_model();

        if let Some(username) = changes.username {
            user_am.username = ActiveValue::Set(Some(username));
        }
        if let Some(display_name) = changes.display_name {
            user_am.display_name = ActiveValue::Set(Some(display_name));
        }
        if let Some(bio) = changes.bio {
            user_am.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(country_code) = changes.country_code {
            user_am.country_code = ActiveValue::Set(Some(country_code));
        }
        if let Some(timezone) = changes.timezone {
            user_am.timezone = ActiveValue::Set(Some(timezone));
        }
        if let Some(preferred_language) = changes.preferred_language {
            user_am.preferred_language = ActiveValue::Set(Some(preferred_language));
        }
        user_am.last_active_at = ActiveValue::Set(Some(now));
        user_am.updated_at = ActiveValue::Set(now);

        user_am.update(self.db).await
    }

    /// Number of leagues the user created
    pub async fn count_created_leagues(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::FantasyLeague::find()
            .filter(entity::fantasy_league::Column::CreatorId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Number of leagues the user is a member of
    pub async fn count_memberships(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::LeagueMembership::find()
            .filter(entity::league_membership::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use matchday_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect a verified user with the given display name
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("alice@example.com", "alice").await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.email, "alice@example.com");
            assert_eq!(user.display_name.as_deref(), Some("alice"));
            assert!(user.email_verified);

            Ok(())
        }

        /// Expect Error when the email is already registered
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            test.user().insert_user("alice@example.com").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("alice@example.com", "alice").await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("alice@example.com", "alice").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_email {
        use matchday_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) for a registered email
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user = test.user().insert_user("alice@example.com").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_by_email("alice@example.com").await;

            assert!(matches!(result, Ok(Some(ref found)) if found.id == user.id));

            Ok(())
        }

        /// Expect Ok(None) for an unknown email
        #[tokio::test]
        async fn returns_none_for_unknown_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_by_email("nobody@example.com").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod update_profile {
        use matchday_test_utils::prelude::*;

        use crate::server::data::user::{ProfileChanges, UserRepository};

        /// Expect only provided fields to change and last_active_at to be stamped
        #[tokio::test]
        async fn overwrites_provided_fields() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user = test.user().insert_user("alice@example.com").await?;

            let user_repo = UserRepository::new(&test.db);
            let changes = ProfileChanges {
                username: Some("alice99".to_string()),
                bio: Some(String::new()),
                ..Default::default()
            };
            let updated = user_repo.update_profile(user, changes).await.unwrap();

            assert_eq!(updated.username.as_deref(), Some("alice99"));
            assert_eq!(updated.bio.as_deref(), Some(""));
            assert_eq!(updated.display_name.as_deref(), Some("alice"));
            assert!(updated.last_active_at.is_some());

            Ok(())
        }

        /// Expect Error when taking a username another user owns
        #[tokio::test]
        async fn fails_for_taken_username() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            test.user()
                .insert_user_with_username("bob@example.com", "striker")
                .await?;
            let user = test.user().insert_user("alice@example.com").await?;

            let user_repo = UserRepository::new(&test.db);
            let changes = ProfileChanges {
                username: Some("striker".to_string()),
                ..Default::default()
            };
            let result = user_repo.update_profile(user, changes).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod counts {
        use matchday_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect created leagues and memberships to be counted separately
        #[tokio::test]
        async fn counts_created_leagues_and_memberships() -> Result<(), TestError> {
            let test = test_setup_with_league_tables!()?;
            test.reference()
                .insert_competition_if_absent("premier-league")
                .await?;
            let alice = test.user().insert_user("alice@example.com").await?;
            let bob = test.user().insert_user("bob@example.com").await?;
            let league = test.league().insert_league(bob.id, "premier-league", 4).await?;
            test.league().insert_league(alice.id, "premier-league", 4).await?;
            test.league().insert_member(league.id, alice.id).await?;

            let user_repo = UserRepository::new(&test.db);

            assert_eq!(user_repo.count_created_leagues(alice.id).await?, 1);
            assert_eq!(user_repo.count_memberships(alice.id).await?, 2);

            Ok(())
        }
    }
}
