use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PlayerPosition;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRefDto {
    pub id: String,
    pub name: String,
    pub short_name: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTeamDto {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
    pub competition: CompetitionRefDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub team_id: String,
    pub name: String,
    #[schema(value_type = String, example = "MID")]
    pub position: PlayerPosition,
    pub shirt_number: Option<i32>,
    pub nationality: Option<String>,
    #[serde(with = "crate::model::money")]
    #[schema(value_type = String)]
    pub market_value_euros: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub team: PlayerTeamDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u64,
    pub limit: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayersPageDto {
    pub players: Vec<PlayerDto>,
    pub pagination: PaginationDto,
}

#[derive(Deserialize, IntoParams, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PlayersQuery {
    /// 1-based page, values below 1 are treated as 1
    pub page: Option<i64>,
    /// Page size, clamped to 1..=100, defaults to 20
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[param(value_type = Option<String>, example = "FWD")]
    pub position: Option<PlayerPosition>,
    pub team_id: Option<String>,
}
