use std::sync::Arc;

use axum::{body::to_bytes, response::Response};
use chrono::Utc;
use matchday::server::{
    identity::{CurrentIdentity, IdentityResolver, Principal},
    model::app::AppState,
    news::NewsCatalog,
};
use matchday_test_utils::TestContext;
use serde_json::Value;

/// Application state over the test database with a fresh news catalog
pub fn app_state(test: &TestContext) -> AppState {
    AppState {
        db: test.db.clone(),
        news: Arc::new(NewsCatalog::new(Utc::now())),
        identity: Arc::new(IdentityResolver::default_chain()),
    }
}

pub fn signed_in(email: &str) -> CurrentIdentity {
    CurrentIdentity(Some(Principal {
        email: email.to_string(),
        name: None,
    }))
}

pub fn anonymous() -> CurrentIdentity {
    CurrentIdentity(None)
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
