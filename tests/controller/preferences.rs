use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::NewsFrequency;
use matchday::{
    model::preferences::SavePreferencesDto,
    server::controller::preferences::{get_preferences, save_preferences},
};
use matchday_test_utils::prelude::*;

use crate::util::{anonymous, app_state, json_body, signed_in};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_league_tables()
        .with_team("arsenal", "premier-league", "Arsenal", "ARS")
        .with_team("liverpool", "premier-league", "Liverpool", "LIV")
        .with_team("real-madrid", "la-liga", "Real Madrid", "RMA")
        .build()
        .await
}

fn request(teams: &[&str]) -> SavePreferencesDto {
    SavePreferencesDto {
        selected_teams: teams.iter().map(|t| t.to_string()).collect(),
        news_frequency: Some(NewsFrequency::Weekly),
        notifications_enabled: Some(false),
    }
}

#[tokio::test]
/// Expect a second save to replace the favourite teams rather than merge them
async fn replaces_favorite_teams() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let first = save_preferences(
        State(state.clone()),
        signed_in("fan@example.com"),
        Ok(Json(request(&["arsenal", "liverpool"]))),
    )
    .await
    .into_response();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(json_body(first).await["message"], "Preferences saved successfully");

    let second = save_preferences(
        State(state.clone()),
        signed_in("fan@example.com"),
        Ok(Json(request(&["real-madrid"]))),
    )
    .await
    .into_response();
    assert_eq!(second.status(), StatusCode::OK);

    let resp = get_preferences(State(state), signed_in("fan@example.com"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["preferences"]["hasCompletedOnboarding"], true);
    assert_eq!(body["preferences"]["newsFrequency"], "weekly");
    assert_eq!(body["preferences"]["notificationsEnabled"], false);
    let favorites = body["favoriteTeams"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["teamId"], "real-madrid");
    assert_eq!(favorites[0]["priority"], 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 naming the unknown team, with nothing stored
async fn rejects_unknown_team() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let resp = save_preferences(
        State(state.clone()),
        signed_in("fan@example.com"),
        Ok(Json(request(&["arsenal", "atlantis-fc"]))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "Unknown team: atlantis-fc");

    let resp = get_preferences(State(state), signed_in("fan@example.com"))
        .await
        .into_response();
    let body = json_body(resp).await;
    assert!(body["preferences"].is_null());
    assert_eq!(body["favoriteTeams"].as_array().map(Vec::len), Some(0));

    Ok(())
}

#[tokio::test]
/// Expect 401 without an identity
async fn requires_identity() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let resp = get_preferences(State(state), anonymous()).await.into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
