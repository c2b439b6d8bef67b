mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let app = common::test_app();
    common::shorten_url(&app.server, "https://example.com").await;

    let response = app.server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "1 links stored");
}
