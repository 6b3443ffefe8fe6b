mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_needs_no_auth_and_reports_healthy() -> Result<()> {
    let app = common::TestApp::spawn().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/health", app.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "mentorhub-api");
    let timestamp = body["timestamp"].as_str().expect("timestamp field");
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp not RFC 3339: {}",
        timestamp
    );

    Ok(())
}
