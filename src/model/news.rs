use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsSourceDto {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: DateTime<Utc>,
    pub source: NewsSourceDto,
    pub league: Option<String>,
    pub category: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsListDto {
    pub articles: Vec<NewsArticleDto>,
    pub total_results: usize,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteTeamSummaryDto {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub league: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationDto {
    pub favorite_teams_count: usize,
    pub favorite_teams: Vec<FavoriteTeamSummaryDto>,
    pub total_available: usize,
    pub is_personalized: bool,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonalizedNewsDto {
    pub news: Vec<NewsArticleDto>,
    pub personalization: PersonalizationDto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
}

#[derive(Deserialize, IntoParams, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct NewsQuery {
    /// League id tag, e.g. `champions-league`
    pub league: Option<String>,
    /// Category tag, e.g. `transfer`
    pub category: Option<String>,
    pub date_range: Option<DateRange>,
    pub limit: Option<usize>,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct PersonalizedNewsQuery {
    /// Maximum articles returned, defaults to 10
    pub limit: Option<usize>,
}
