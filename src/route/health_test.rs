use poem::test::TestClient;
use serde_json::{json, Value};

use crate::{
    core::{
        db::ProfileStore,
        test_utils::{test_app_state, test_config},
    },
    init_openapi_route,
};

#[tokio::test]
async fn test_health_api() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = test_app_state(ProfileStore::new());
    let app = init_openapi_route(app_state, &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/health").send().await;

    // Expect
    resp.assert_status_is_ok();
    let body: Value = resp.json().await.value().deserialize();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["graphql"], "/graphql");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    Ok(())
}

#[tokio::test]
async fn test_welcome_api_at_root() -> anyhow::Result<()> {
    // Given
    let mut config = test_config();
    config.prefix = None;
    let app_state = test_app_state(ProfileStore::new());
    let app = init_openapi_route(app_state, &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/").send().await;
    let health = cli.get("/health").send().await;

    // Expect
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "message": "Welcome to the Freelance Profiles API",
        "graphql": "/graphql",
        "health": "/health",
        "docs": "/docs"
    }))
    .await;
    health.assert_status_is_ok();
    Ok(())
}
