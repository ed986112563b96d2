use sea_orm::DatabaseConnection;

use crate::{
    model::user::{UpdateUserDto, UserCountsDto, UserProfileDto, UserSummaryDto},
    server::{
        data::{
            preferences::PreferencesRepository,
            user::{ProfileChanges, UserRepository},
        },
        error::{user::UserError, Error},
        identity::Principal,
        model::db::UserModel,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the user registered under the principal's email
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The registered user
    /// - `Err(Error::UserError(UserError::NotFound))` - Identity resolved but no user row exists
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn require_user(&self, principal: &Principal) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .find_by_email(&principal.email)
            .await?
            .ok_or_else(|| Error::UserError(UserError::NotFound(principal.email.clone())))
    }

    /// Finds the user for the principal, creating it on first use
    ///
    /// New users get a verified email and the principal's name, or the local part of the
    /// email when no name is known, as display name.
    pub async fn get_or_create_by_principal(
        &self,
        principal: &Principal,
    ) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_email(&principal.email).await? {
            return Ok(user);
        }

        let display_name = default_display_name(&principal.email, principal.name.as_deref());

        match user_repo.create(&principal.email, &display_name).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Created user on first sign in");

                Ok(user)
            }
            Err(err) => {
                // A concurrent request may have created the same email first
                match user_repo.find_by_email(&principal.email).await? {
                    Some(user) => Ok(user),
                    None => Err(err.into()),
                }
            }
        }
    }

    /// Whether the user has finished onboarding; users without preferences have not
    pub async fn has_completed_onboarding(&self, user_id: i32) -> Result<bool, Error> {
        let preferences = PreferencesRepository::new(self.db)
            .find_by_user(user_id)
            .await?;

        Ok(preferences.is_some_and(|p| p.has_completed_onboarding))
    }

    pub async fn get_profile(&self, principal: &Principal) -> Result<UserProfileDto, Error> {
        let user = self.require_user(principal).await?;

        self.profile(user).await
    }

    /// Applies profile changes for the principal's user
    ///
    /// Non-empty strings overwrite the stored value, `bio` overwrites whenever present. Taking
    /// a username owned by another user fails with [`UserError::UsernameTaken`].
    pub async fn update_profile(
        &self,
        principal: &Principal,
        changes: UpdateUserDto,
    ) -> Result<UserProfileDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let user = self.require_user(principal).await?;

        let changes = ProfileChanges {
            username: non_empty(changes.username),
            display_name: non_empty(changes.display_name),
            bio: changes.bio,
            country_code: non_empty(changes.country_code),
            timezone: non_empty(changes.timezone),
            preferred_language: non_empty(changes.preferred_language),
        };

        if let Some(username) = &changes.username {
            if let Some(owner) = user_repo.find_by_username(username).await? {
                if owner.id != user.id {
                    return Err(UserError::UsernameTaken(username.clone()).into());
                }
            }
        }

        let updated = user_repo.update_profile(user, changes).await?;

        self.profile(updated).await
    }

    async fn profile(&self, user: UserModel) -> Result<UserProfileDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let created_leagues = user_repo.count_created_leagues(user.id).await?;
        let league_memberships = user_repo.count_memberships(user.id).await?;

        Ok(UserProfileDto {
            id: user.id,
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
            bio: user.bio,
            country_code: user.country_code,
            timezone: user.timezone,
            preferred_language: user.preferred_language,
            is_premium: user.is_premium,
            premium_expires_at: user.premium_expires_at.map(|at| at.and_utc()),
            total_experience_points: user.total_experience_points,
            reputation_score: user.reputation_score,
            created_at: user.created_at.and_utc(),
            last_active_at: user.last_active_at.map(|at| at.and_utc()),
            counts: UserCountsDto {
                created_leagues,
                league_memberships,
            },
        })
    }
}

/// The provided name when it isn't blank, else the local part of the email.
pub fn default_display_name(email: &str, name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => email_local_part(email).to_string(),
    }
}

pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<&UserModel> for UserSummaryDto {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use matchday_test_utils::prelude::*;

    use crate::server::identity::Principal;

    fn principal(email: &str, name: Option<&str>) -> Principal {
        Principal {
            email: email.to_string(),
            name: name.map(str::to_string),
        }
    }

    mod get_or_create_by_principal {
        use matchday_test_utils::prelude::*;

        use super::principal;
        use crate::server::service::user::UserService;

        /// Expect the existing user to be returned unchanged
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_league_tables!()?;
            let existing = test.user().insert_user("alice@example.com").await?;

            let user_service = UserService::new(&test.db);
            let user = user_service
                .get_or_create_by_principal(&principal("alice@example.com", Some("Someone Else")))
                .await
                .unwrap();

            assert_eq!(user.id, existing.id);
            assert_eq!(user.display_name.as_deref(), Some("alice"));

            Ok(())
        }

        /// Expect a new user named after the principal
        #[tokio::test]
        async fn creates_user_with_principal_name() -> Result<(), TestError> {
            let test = test_setup_with_league_tables!()?;

            let user_service = UserService::new(&test.db);
            let user = user_service
                .get_or_create_by_principal(&principal("bob@example.com", Some("Bob")))
                .await
                .unwrap();

            assert_eq!(user.display_name.as_deref(), Some("Bob"));
            assert!(user.email_verified);

            Ok(())
        }

        /// Expect the email local part when no name is known
        #[tokio::test]
        async fn falls_back_to_email_local_part() -> Result<(), TestError> {
            let test = test_setup_with_league_tables!()?;

            let user_service = UserService::new(&test.db);
            let user = user_service
                .get_or_create_by_principal(&principal("carol@example.com", Some("  ")))
                .await
                .unwrap();

            assert_eq!(user.display_name.as_deref(), Some("carol"));

            Ok(())
        }
    }

    mod update_profile {
        use matchday_test_utils::prelude::*;

        use super::principal;
        use crate::{
            model::user::UpdateUserDto,
            server::{
                error::{user::UserError, Error},
                service::user::UserService,
            },
        };

        /// Expect empty strings to be ignored except for bio
        #[tokio::test]
        async fn ignores_empty_strings_but_clears_bio() -> Result<(), TestError> {
            let test = test_setup_with_league_tables!()?;
            test.user().insert_user("alice@example.com").await?;

            let user_service = UserService::new(&test.db);
            user_service
                .update_profile(
                    &principal("alice@example.com", None),
                    UpdateUserDto {
                        bio: Some("Gunner since 98".to_string()),
                        timezone: Some("Europe/London".to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            let profile = user_service
                .update_profile(
                    &principal("alice@example.com", None),
                    UpdateUserDto {
                        display_name: Some(String::new()),
                        bio: Some(String::new()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();

            assert_eq!(profile.display_name.as_deref(), Some("alice"));
            assert_eq!(profile.bio.as_deref(), Some(""));
            assert_eq!(profile.timezone.as_deref(), Some("Europe/London"));
            assert!(profile.last_active_at.is_some());

            Ok(())
        }

        /// Expect UsernameTaken when another user owns the username
        #[tokio::test]
        async fn rejects_taken_username() -> Result<(), TestError> {
            let test = test_setup_with_league_tables!()?;
            test.user()
                .insert_user_with_username("bob@example.com", "striker")
                .await?;
            test.user().insert_user("alice@example.com").await?;

            let user_service = UserService::new(&test.db);
            let result = user_service
                .update_profile(
                    &principal("alice@example.com", None),
                    UpdateUserDto {
                        username: Some("striker".to_string()),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::UserError(UserError::UsernameTaken(_)))
            ));

            Ok(())
        }

        /// Expect keeping one's own username to succeed
        #[tokio::test]
        async fn allows_own_username() -> Result<(), TestError> {
            let test = test_setup_with_league_tables!()?;
            test.user()
                .insert_user_with_username("bob@example.com", "striker")
                .await?;

            let user_service = UserService::new(&test.db);
            let profile = user_service
                .update_profile(
                    &principal("bob@example.com", None),
                    UpdateUserDto {
                        username: Some("striker".to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();

            assert_eq!(profile.username.as_deref(), Some("striker"));

            Ok(())
        }
    }

    /// Expect NotFound for a principal without a user row
    #[tokio::test]
    async fn get_profile_requires_existing_user() -> Result<(), TestError> {
        use crate::server::{
            error::{user::UserError, Error},
            service::user::UserService,
        };

        let test = test_setup_with_league_tables!()?;

        let result = UserService::new(&test.db)
            .get_profile(&principal("ghost@example.com", None))
            .await;

        assert!(matches!(result, Err(Error::UserError(UserError::NotFound(_)))));

        Ok(())
    }

    #[test]
    fn derives_display_name() {
        use crate::server::service::user::default_display_name;

        assert_eq!(default_display_name("dev@example.com", None), "dev");
        assert_eq!(default_display_name("dev@example.com", Some("Dev")), "Dev");
    }
}
