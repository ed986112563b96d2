use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use matchday::{
    model::news::{NewsQuery, PersonalizedNewsQuery},
    server::controller::news::{list_news, personalized_news},
};
use matchday_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::{app_state, json_body, signed_in};

#[tokio::test]
/// Expect the public feed to respect the limit while reporting the full match count
async fn lists_limited_news() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state = app_state(&test);

    let resp = list_news(
        State(state),
        Ok(Query(NewsQuery {
            limit: Some(2),
            ..Default::default()
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["articles"].as_array().map(Vec::len), Some(2));
    assert!(body["totalResults"].as_u64().unwrap() >= 2);

    Ok(())
}

#[tokio::test]
/// Expect 403 with a redirect to onboarding for users who have not finished it
async fn redirects_to_onboarding() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_onboarded_user("rookie@example.com", false)
        .build()
        .await?;
    let state = app_state(&test);

    let resp = personalized_news(
        State(state),
        signed_in("rookie@example.com"),
        Ok(Query(PersonalizedNewsQuery::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Onboarding not completed");
    assert_eq!(body["redirectTo"], "/onboarding");

    Ok(())
}

#[tokio::test]
/// Expect onboarded users with favourites to get a personalised feed
async fn personalizes_for_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_team("arsenal", "premier-league", "Arsenal", "ARS")
        .with_onboarded_user("fan@example.com", true)
        .build()
        .await?;
    let user = entity::prelude::User::find()
        .one(&test.db)
        .await?
        .unwrap();
    test.user().insert_favorite_team(user.id, "arsenal", 1).await?;
    let state = app_state(&test);

    let resp = personalized_news(
        State(state),
        signed_in("fan@example.com"),
        Ok(Query(PersonalizedNewsQuery { limit: Some(3) })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["personalization"]["isPersonalized"], true);
    assert_eq!(body["personalization"]["favoriteTeamsCount"], 1);
    assert_eq!(body["personalization"]["favoriteTeams"][0]["id"], "arsenal");
    assert!(body["news"].as_array().unwrap().len() <= 3);

    Ok(())
}
