#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::Arc;
use url_shortener::api::routes::router;
use url_shortener::application::services::LinkSettings;
use url_shortener::domain::clock::ManualClock;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap()
}

/// Server over fresh in-memory stores, plus the clock driving it.
pub struct TestApp {
    pub server: TestServer,
    pub clock: Arc<ManualClock>,
    pub state: AppState,
}

pub fn create_test_state(settings: LinkSettings) -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let state = AppState::new(BASE_URL, settings, clock.clone());
    (state, clock)
}

pub fn test_app() -> TestApp {
    test_app_with(LinkSettings::default())
}

pub fn test_app_with(settings: LinkSettings) -> TestApp {
    let (state, clock) = create_test_state(settings);
    let server = TestServer::new(router(state.clone())).unwrap();

    TestApp {
        server,
        clock,
        state,
    }
}

/// Creates a link through the API and returns the response body.
pub async fn shorten(server: &TestServer, body: Value) -> Value {
    let response = server.post("/shorten").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn shorten_url(server: &TestServer, long_url: &str) -> String {
    let body = shorten(server, json!({ "longUrl": long_url })).await;
    body["shortcode"].as_str().unwrap().to_string()
}
