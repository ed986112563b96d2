use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i32,
    pub email: String,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
    pub is_premium: bool,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub total_experience_points: i32,
    pub reputation_score: i32,
    pub created_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
    pub counts: UserCountsDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCountsDto {
    pub created_leagues: u64,
    pub league_memberships: u64,
}

/// Profile changes; absent or empty strings leave a field untouched, except `bio`
#[derive(Clone, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
}

/// Minimal user reference embedded in league responses
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub display_name: Option<String>,
    pub email: String,
}
