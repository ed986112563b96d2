use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, RedirectErrorDto},
        news::{NewsListDto, NewsQuery, PersonalizedNewsDto, PersonalizedNewsQuery},
    },
    server::{
        controller::util::query_params, error::Error, identity::CurrentIdentity,
        model::app::AppState, service::news::NewsService,
    },
};

pub static NEWS_TAG: &str = "news";

/// Browse the news catalog
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(NewsQuery),
    responses(
        (status = 200, description = "Articles matching the filters, newest first", body = NewsListDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto)
    ),
)]
pub async fn list_news(
    State(state): State<AppState>,
    query: Result<Query<NewsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let query = query_params(query)?;
    let news = NewsService::new(&state.db, &state.news).list(query);

    Ok((StatusCode::OK, Json(news)))
}

/// News matching the caller's favourite teams
#[utoipa::path(
    get,
    path = "/api/news/personalized",
    tag = NEWS_TAG,
    params(PersonalizedNewsQuery),
    responses(
        (status = 200, description = "Personalised news", body = PersonalizedNewsDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Onboarding not completed", body = RedirectErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn personalized_news(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    query: Result<Query<PersonalizedNewsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let query = query_params(query)?;
    let principal = identity.require()?;

    let news = NewsService::new(&state.db, &state.news)
        .personalized(&principal, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(news)))
}
