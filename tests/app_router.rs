mod common;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use std::net::SocketAddr;
use tower::ServiceExt;
use url_shortener::application::services::LinkSettings;
use url_shortener::config::Config;
use url_shortener::routes::app_router;

fn get(uri: &str) -> Request<Body> {
    let mut request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (state, _clock) = common::create_test_state(LinkSettings::default());
    let link = state
        .link_service
        .create_short_link("https://example.com", None, Some("slash".to_string()))
        .await
        .unwrap();

    let app = app_router(state, &Config::default()).unwrap();
    let response = app.oneshot(get(&format!("/{}/", link.code))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_rate_limit_rejects_after_burst() {
    let (state, _clock) = common::create_test_state(LinkSettings::default());
    let config = Config {
        rate_limit_per_second: 1,
        rate_limit_burst: 2,
        ..Config::default()
    };
    let app = app_router(state, &config).unwrap();

    for _ in 0..2 {
        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
