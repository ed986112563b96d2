use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::future::join_all;
use matchday::{
    model::league::{CreateLeagueDto, InviteRequestDto, PublicLeaguesQuery},
    server::{
        controller::league::{
            create_league, get_invite_details, invite, join_league, list_my_leagues,
            list_public_leagues, start_draft,
        },
        data::league::LeagueRepository,
    },
};
use matchday_test_utils::prelude::*;

use crate::util::{anonymous, app_state, json_body, signed_in};

fn create_request(max_members: i32) -> CreateLeagueDto {
    CreateLeagueDto {
        name: Some("Sunday Legends".to_string()),
        competition_id: Some("premier-league".to_string()),
        max_members: Some(max_members),
        ..Default::default()
    }
}

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_league_tables()
        .with_competition("premier-league")
        .build()
        .await
}

#[tokio::test]
/// Expect 201 with money serialised as strings
async fn creates_league() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let resp = create_league(
        State(state),
        signed_in("alice@example.com"),
        Ok(Json(create_request(8))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["budgetLimit"], "100000000");
    assert_eq!(body["entryFee"], "0");
    assert_eq!(body["status"], "DRAFT");
    assert_eq!(body["leagueType"], "PRIVATE");
    assert_eq!(body["currentMembers"], 1);
    assert_eq!(body["creator"]["email"], "alice@example.com");

    Ok(())
}

#[tokio::test]
/// Expect 401 without an identity
async fn rejects_anonymous_create() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let resp = create_league(State(state), anonymous(), Ok(Json(create_request(8))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the second joiner of a two member league to be turned away
async fn fills_two_member_league() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let created = create_league(
        State(state.clone()),
        signed_in("alice@example.com"),
        Ok(Json(create_request(2))),
    )
    .await
    .into_response();
    let league_id = json_body(created).await["id"].as_i64().unwrap() as i32;

    let joined = join_league(
        State(state.clone()),
        signed_in("bob@example.com"),
        Ok(Path(league_id)),
    )
    .await
    .into_response();
    assert_eq!(joined.status(), StatusCode::OK);
    let body = json_body(joined).await;
    assert_eq!(body["message"], "Successfully joined the league!");
    assert_eq!(body["membership"]["teamName"], "bob's Team");

    let rejected = join_league(
        State(state.clone()),
        signed_in("carol@example.com"),
        Ok(Path(league_id)),
    )
    .await
    .into_response();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(rejected).await["error"], "League is full");

    let league = LeagueRepository::new(&test.db)
        .find_by_id(league_id)
        .await?
        .unwrap();
    assert_eq!(league.current_members, 2);

    Ok(())
}

#[tokio::test]
/// Expect concurrent joins never to push the league past its cap
async fn concurrent_joins_respect_capacity() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);
    let owner = test.user().insert_user("owner@example.com").await?;
    let league = test.league().insert_league(owner.id, "premier-league", 3).await?;
    let league_id = league.id;

    let emails: Vec<String> = (0..6).map(|i| format!("player{}@example.com", i)).collect();
    let joins = emails.iter().map(|email| {
        let state = state.clone();
        async move {
            join_league(State(state), signed_in(email), Ok(Path(league_id)))
                .await
                .into_response()
                .status()
        }
    });
    let statuses = join_all(joins).await;

    let joined = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let full = statuses
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();
    assert_eq!(joined, 2);
    assert_eq!(full, 4);

    let league = LeagueRepository::new(&test.db)
        .find_by_id(league_id)
        .await?
        .unwrap();
    assert_eq!(league.current_members, 3);

    Ok(())
}

#[tokio::test]
/// Expect a second join by the same user to fail without touching the counter
async fn duplicate_join_keeps_counter() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);
    let owner = test.user().insert_user("owner@example.com").await?;
    let league = test.league().insert_league(owner.id, "premier-league", 6).await?;

    let first = join_league(
        State(state.clone()),
        signed_in("bob@example.com"),
        Ok(Path(league.id)),
    )
    .await
    .into_response();
    let second = join_league(
        State(state.clone()),
        signed_in("bob@example.com"),
        Ok(Path(league.id)),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(second).await["error"],
        "You are already a member of this league"
    );

    let league = LeagueRepository::new(&test.db)
        .find_by_id(league.id)
        .await?
        .unwrap();
    assert_eq!(league.current_members, 2);

    Ok(())
}

#[tokio::test]
/// Expect the draft to start once a second member joined, and the caller's list to show it
async fn starts_draft_after_join() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let created = create_league(
        State(state.clone()),
        signed_in("alice@example.com"),
        Ok(Json(create_request(4))),
    )
    .await
    .into_response();
    let league_id = json_body(created).await["id"].as_i64().unwrap() as i32;

    let too_early = start_draft(
        State(state.clone()),
        signed_in("alice@example.com"),
        Ok(Path(league_id)),
    )
    .await
    .into_response();
    assert_eq!(too_early.status(), StatusCode::BAD_REQUEST);

    let joined = join_league(
        State(state.clone()),
        signed_in("bob@example.com"),
        Ok(Path(league_id)),
    )
    .await
    .into_response();
    assert_eq!(joined.status(), StatusCode::OK);

    let by_member = start_draft(
        State(state.clone()),
        signed_in("bob@example.com"),
        Ok(Path(league_id)),
    )
    .await
    .into_response();
    assert_eq!(by_member.status(), StatusCode::FORBIDDEN);

    let started = start_draft(
        State(state.clone()),
        signed_in("alice@example.com"),
        Ok(Path(league_id)),
    )
    .await
    .into_response();
    assert_eq!(started.status(), StatusCode::OK);
    let body = json_body(started).await;
    assert_eq!(body["leagueStatus"], "AUCTION");
    assert_eq!(
        body["message"],
        "Draft started successfully! League status updated to AUCTION"
    );

    let mine = list_my_leagues(State(state.clone()), signed_in("bob@example.com"))
        .await
        .into_response();
    let body = json_body(mine).await;
    assert_eq!(body[0]["id"], league_id);
    assert_eq!(body[0]["memberCount"], 2);
    assert_eq!(body[0]["status"], "AUCTION");

    Ok(())
}

#[tokio::test]
/// Expect invitations by unknown email to report success
async fn invites_by_email() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);
    let owner = test.user().insert_user("owner@example.com").await?;
    let league = test.league().insert_league(owner.id, "premier-league", 4).await?;

    let resp = invite(
        State(state.clone()),
        signed_in("owner@example.com"),
        Ok(Path(league.id)),
        Ok(Json(InviteRequestDto {
            kind: Some("email".to_string()),
            username: None,
            email: Some("friend@example.com".to_string()),
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Invitation sent to friend@example.com");

    let details = get_invite_details(State(state), Ok(Path(league.id)))
        .await
        .into_response();
    assert_eq!(details.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect public browsing without an identity
async fn lists_public_leagues_anonymously() -> Result<(), TestError> {
    let test = setup().await?;
    let state = app_state(&test);

    let created = create_league(
        State(state.clone()),
        signed_in("alice@example.com"),
        Ok(Json(CreateLeagueDto {
            league_type: Some(entity::sea_orm_active_enums::LeagueType::Public),
            ..create_request(6)
        })),
    )
    .await
    .into_response();
    assert_eq!(created.status(), StatusCode::CREATED);

    let resp = list_public_leagues(State(state), Ok(Query(PublicLeaguesQuery::default())))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["competition"]["id"], "premier-league");

    Ok(())
}
