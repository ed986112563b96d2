use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{LeagueStatus, LeagueType, SelectionMethod};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::user::UserSummaryDto;

/// Request body for creating a league; every field besides `name` and `competitionId` is optional
#[derive(Clone, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub competition_id: Option<String>,
    #[schema(value_type = Option<String>, example = "PRIVATE")]
    pub league_type: Option<LeagueType>,
    pub max_members: Option<i32>,
    #[serde(default, with = "crate::model::money::option")]
    #[schema(value_type = Option<String>)]
    pub entry_fee: Option<i64>,
    #[schema(value_type = Option<String>, example = "AUCTION")]
    pub selection_method: Option<SelectionMethod>,
    #[serde(default, with = "crate::model::money::option")]
    #[schema(value_type = Option<String>)]
    pub budget_limit: Option<i64>,
    pub squad_size: Option<i32>,
    pub has_playoffs: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionSummaryDto {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub country: String,
    pub logo_url: Option<String>,
}

/// A league row with its creator and competition
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub competition_id: String,
    #[schema(value_type = String)]
    pub league_type: LeagueType,
    #[schema(value_type = String)]
    pub status: LeagueStatus,
    #[schema(value_type = String)]
    pub selection_method: SelectionMethod,
    pub max_members: i32,
    pub current_members: i32,
    #[serde(with = "crate::model::money")]
    #[schema(value_type = String)]
    pub budget_limit: i64,
    #[serde(with = "crate::model::money")]
    #[schema(value_type = String)]
    pub entry_fee: i64,
    #[serde(with = "crate::model::money")]
    #[schema(value_type = String)]
    pub prize_pool: i64,
    pub squad_size: i32,
    pub has_playoffs: bool,
    pub draft_started_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator: UserSummaryDto,
    pub competition: CompetitionSummaryDto,
}

/// Entry of the caller's league list
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyLeagueDto {
    #[serde(flatten)]
    pub league: LeagueDto,
    pub memberships: Vec<MembershipSummaryDto>,
    pub member_count: u64,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSummaryDto {
    pub id: i32,
    pub team_name: String,
    pub total_points: i32,
    pub gameweek_points: i32,
    pub league_position: Option<i32>,
    pub user: UserSummaryDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicLeagueDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub current_members: i32,
    pub max_members: i32,
    #[schema(value_type = String)]
    pub status: LeagueStatus,
    #[schema(value_type = String)]
    pub league_type: LeagueType,
    pub competition: CompetitionSummaryDto,
    pub creator: UserSummaryDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct PublicLeaguesQuery {
    /// Maximum leagues to consider, defaults to 20
    pub limit: Option<u64>,
    /// Case-insensitive match against name or description
    pub search: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRulesDto {
    pub goal_points: i32,
    pub assist_points: i32,
    pub clean_sheet_gk_points: i32,
    pub yellow_card_points: i32,
    pub red_card_points: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterUserDto {
    pub id: i32,
    pub display_name: Option<String>,
    pub email: String,
    pub total_experience_points: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub team_name: String,
    pub total_points: i32,
    pub gameweek_points: i32,
    pub league_position: Option<i32>,
    pub is_admin: bool,
    pub joined_at: DateTime<Utc>,
    pub user: RosterUserDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDetailDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub current_members: i32,
    pub max_members: i32,
    #[serde(with = "crate::model::money")]
    #[schema(value_type = String)]
    pub budget_limit: i64,
    pub squad_size: i32,
    #[schema(value_type = String)]
    pub status: LeagueStatus,
    #[schema(value_type = String)]
    pub league_type: LeagueType,
    #[schema(value_type = String)]
    pub selection_method: SelectionMethod,
    pub has_playoffs: bool,
    pub created_at: DateTime<Utc>,
    pub competition: CompetitionSummaryDto,
    pub creator: UserSummaryDto,
    pub memberships: Vec<RosterEntryDto>,
    pub scoring_rules: Option<ScoringRulesDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLeagueUserDto {
    pub id: i32,
    pub email: String,
    pub is_league_admin: bool,
    pub is_league_creator: bool,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDetailsDto {
    pub league: LeagueDetailDto,
    pub current_user: CurrentLeagueUserDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinedMembershipDto {
    pub id: i32,
    pub team_name: String,
    pub league_id: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinLeagueResponseDto {
    pub success: bool,
    pub message: String,
    pub membership: JoinedMembershipDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartDraftResponseDto {
    pub success: bool,
    pub message: String,
    #[schema(value_type = String)]
    pub league_status: LeagueStatus,
}

/// Public summary shown on an invitation link before joining
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InviteDetailsDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub competition: CompetitionSummaryDto,
    pub creator: UserSummaryDto,
    pub current_members: i32,
    pub max_members: i32,
    #[schema(value_type = String)]
    pub status: LeagueStatus,
    #[schema(value_type = String)]
    pub league_type: LeagueType,
}

#[derive(Clone, Deserialize, ToSchema, Default)]
pub struct InviteRequestDto {
    /// Either `username` or `email`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}
