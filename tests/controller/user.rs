use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matchday::{
    model::user::UpdateUserDto,
    server::controller::user::{get_me, update_me},
};
use matchday_test_utils::prelude::*;

use crate::util::{app_state, json_body, signed_in};

#[tokio::test]
/// Expect 404 for an identity with no user row
async fn get_me_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;
    let state = app_state(&test);

    let resp = get_me(State(state), signed_in("ghost@example.com"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "User not found");

    Ok(())
}

#[tokio::test]
/// Expect a username owned by someone else to be refused
async fn update_me_taken_username() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;
    test.user()
        .insert_user_with_username("keeper@example.com", "safehands")
        .await?;
    test.user().insert_user("striker@example.com").await?;
    let state = app_state(&test);

    let resp = update_me(
        State(state.clone()),
        signed_in("striker@example.com"),
        Ok(Json(UpdateUserDto {
            username: Some("safehands".to_string()),
            ..Default::default()
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = update_me(
        State(state),
        signed_in("striker@example.com"),
        Ok(Json(UpdateUserDto {
            username: Some("goalmachine".to_string()),
            bio: Some("Nine".to_string()),
            ..Default::default()
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["username"], "goalmachine");
    assert_eq!(body["bio"], "Nine");
    assert_eq!(body["counts"]["createdLeagues"], 0);

    Ok(())
}
