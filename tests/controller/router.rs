use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use matchday::server::{
    identity::dev_cookie::{DevSession, DevSessionUser, DEV_SESSION_COOKIE},
    router::routes,
};
use matchday_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{app_state, json_body};

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(app_state(test))
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Signs in through the development endpoint and returns the `name=value` cookie pair
async fn dev_cookie(app: &Router, email: &str) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/auth/dev-signin",
            None,
            &format!(r#"{{"email":"{}"}}"#, email),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("dev-session="))
        .expect("dev-session cookie not set")
        .to_string();

    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
/// Expect the team list filtered to one league
async fn lists_teams_for_league() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/teams?league=premier-league")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let teams = body["teams"].as_array().unwrap();
    assert!(!teams.is_empty());
    assert!(teams.iter().all(|team| team["leagueId"] == "premier-league"));
    assert_eq!(body["leagues"].as_array().map(Vec::len), Some(5));

    Ok(())
}

#[tokio::test]
/// Expect the development cookie to authenticate later requests
async fn dev_signin_cookie_authenticates() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;
    let app = app(&test);

    let cookie = dev_cookie(&app, "coach@example.com").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["email"], "coach@example.com");
    assert_eq!(body["displayName"], "coach");

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a request body that is not valid JSON
async fn rejects_malformed_json() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;
    let app = app(&test);
    let cookie = dev_cookie(&app, "coach@example.com").await;

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/leagues",
            Some(&cookie),
            "{\"name\": ",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to be served
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"]["/api/leagues/{league_id}/join"].is_object());

    Ok(())
}

#[tokio::test]
/// Expect a development cookie with a blank email to count as signed out
async fn blank_email_cookie_is_unauthorized() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;
    let session = DevSession {
        user: DevSessionUser {
            id: 1,
            email: String::new(),
            name: None,
        },
    };
    let cookie = format!("{}={}", DEV_SESSION_COOKIE, session.encode().unwrap());

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/user/preferences",
            Some(&cookie),
            r#"{"selectedTeams":[]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect malformed path and query values to get a JSON error body
async fn rejects_malformed_path_and_query() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;
    let app = app(&test);
    let cookie = dev_cookie(&app, "coach@example.com").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/leagues/not-a-number/details")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/players?page=first")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());

    Ok(())
}

#[tokio::test]
/// Expect extreme paging values to produce an empty page rather than an error
async fn handles_extreme_paging_values() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/players?page=9223372036854775807&limit=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["players"].as_array().map(Vec::len), Some(0));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/leagues/public?limit=18446744073709551615")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
