use entity::sea_orm_active_enums::NewsFrequency;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::SuccessDto,
        preferences::{
            FavoriteTeamDetailDto, FavoriteTeamDto, PreferencesDto, PreferencesResponseDto,
            PreferencesUserDto, SavePreferencesDto,
        },
    },
    server::{
        data::{
            favorite_team::FavoriteTeamRepository,
            preferences::{OnboardingSettings, PreferencesRepository},
            reference::TeamRepository,
        },
        error::{preferences::PreferencesError, Error},
        identity::Principal,
        service::user::UserService,
    },
};

pub struct PreferencesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreferencesService<'a> {
    /// Creates a new instance of [`PreferencesService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The caller's onboarding preferences and favourite teams by priority
    ///
    /// `preferences` is `None` until onboarding has been saved once.
    pub async fn get_preferences(
        &self,
        principal: &Principal,
    ) -> Result<PreferencesResponseDto, Error> {
        let user = UserService::new(self.db).require_user(principal).await?;

        let preferences = PreferencesRepository::new(self.db)
            .find_by_user(user.id)
            .await?
            .map(|p| PreferencesDto {
                id: p.id,
                user_id: p.user_id,
                has_completed_onboarding: p.has_completed_onboarding,
                news_frequency: p.news_frequency,
                notifications_enabled: p.notifications_enabled,
                email_notifications: p.email_notifications,
                push_notifications: p.push_notifications,
                created_at: p.created_at.and_utc(),
                updated_at: p.updated_at.and_utc(),
            });

        let mut favorite_teams = Vec::new();
        for (favorite, team) in FavoriteTeamRepository::new(self.db)
            .find_by_user_with_team(user.id)
            .await?
        {
            let team = team.ok_or_else(|| {
                Error::InternalError(format!(
                    "Team {} of favourite ID {} not found",
                    favorite.team_id, favorite.id
                ))
            })?;

            favorite_teams.push(FavoriteTeamDto {
                id: favorite.id,
                team_id: favorite.team_id,
                priority: favorite.priority,
                team: FavoriteTeamDetailDto {
                    id: team.id,
                    name: team.name,
                    short_name: team.short_name,
                    logo_url: team.logo_url,
                    competition_id: team.competition_id,
                },
            });
        }

        Ok(PreferencesResponseDto {
            user: PreferencesUserDto {
                id: user.id,
                email: user.email,
                display_name: user.display_name,
            },
            preferences,
            favorite_teams,
        })
    }

    /// Stores the onboarding answers and replaces the favourite teams
    ///
    /// Duplicate team ids keep their first position. The preferences upsert and the
    /// favourite replacement commit together.
    ///
    /// # Returns
    /// - `Ok(SuccessDto)` - Preferences saved and onboarding marked complete
    /// - `Err(PreferencesError::UnknownTeam)` - A selected team id has no team row
    pub async fn save_preferences(
        &self,
        principal: &Principal,
        request: SavePreferencesDto,
    ) -> Result<SuccessDto, Error> {
        let user = UserService::new(self.db)
            .get_or_create_by_principal(principal)
            .await?;

        let mut team_ids: Vec<String> = Vec::with_capacity(request.selected_teams.len());
        for team_id in request.selected_teams {
            if !team_ids.contains(&team_id) {
                team_ids.push(team_id);
            }
        }

        let known = TeamRepository::new(self.db)
            .find_many(team_ids.clone())
            .await?;
        if let Some(unknown) = team_ids
            .iter()
            .find(|team_id| !known.iter().any(|team| &team.id == *team_id))
        {
            return Err(PreferencesError::UnknownTeam(unknown.clone()).into());
        }

        let settings = OnboardingSettings {
            news_frequency: request.news_frequency.unwrap_or(NewsFrequency::Daily),
            notifications_enabled: request.notifications_enabled.unwrap_or(true),
        };

        let txn = self.db.begin().await?;

        PreferencesRepository::new(&txn)
            .upsert_completed(user.id, settings)
            .await?;
        FavoriteTeamRepository::new(&txn)
            .replace(user.id, &team_ids)
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = %user.id, favorite_teams = team_ids.len(), "Onboarding preferences saved");

        Ok(SuccessDto {
            success: true,
            message: "Preferences saved successfully".to_string(),
        })
    }
}
