use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NewsFrequency;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUserDto {
    pub id: i32,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDto {
    pub id: i32,
    pub user_id: i32,
    pub has_completed_onboarding: bool,
    #[schema(value_type = String, example = "daily")]
    pub news_frequency: NewsFrequency,
    pub notifications_enabled: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteTeamDetailDto {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
    pub competition_id: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteTeamDto {
    pub id: i32,
    pub team_id: String,
    pub priority: i32,
    pub team: FavoriteTeamDetailDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponseDto {
    pub user: PreferencesUserDto,
    pub preferences: Option<PreferencesDto>,
    pub favorite_teams: Vec<FavoriteTeamDto>,
}

/// Full onboarding snapshot; favourite teams are replaced, never merged
#[derive(Clone, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavePreferencesDto {
    #[serde(default)]
    pub selected_teams: Vec<String>,
    #[schema(value_type = Option<String>, example = "daily")]
    pub news_frequency: Option<NewsFrequency>,
    pub notifications_enabled: Option<bool>,
}
