use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LeagueInfoDto {
    pub id: String,
    pub name: String,
    pub country: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfoDto {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo_url: String,
    pub league: String,
    pub league_id: String,
    pub country: String,
    pub primary_color: String,
    pub secondary_color: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamsDto {
    pub leagues: Vec<LeagueInfoDto>,
    pub teams: Vec<TeamInfoDto>,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct TeamsQuery {
    /// Restrict teams to one league id, e.g. `premier-league`
    pub league: Option<String>,
}
