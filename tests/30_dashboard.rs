mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

use common::{valid_token, TestApp};

async fn get_dashboard(app: &TestApp) -> Result<reqwest::Response> {
    let client = reqwest::Client::new();
    Ok(client
        .get(format!("{}/api/dashboard", app.base_url))
        .bearer_auth(valid_token())
        .send()
        .await?)
}

#[tokio::test]
async fn user_with_no_rows_gets_defaults_not_errors() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_empty_dashboard().await;

    let res = get_dashboard(&app).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["stats"]["learning_hours"].as_f64(), Some(0.0));
    assert_eq!(body["stats"]["completed_sessions"].as_i64(), Some(0));
    assert_eq!(body["stats"]["skills_in_progress"].as_i64(), Some(0));
    assert_eq!(body["stats"]["network_growth"].as_i64(), Some(0));
    assert_eq!(body["learning_paths"], json!([]));
    assert_eq!(body["upcoming_sessions"], json!([]));
    assert_eq!(body["recommended_mentors"], json!([]));
    Ok(())
}

#[tokio::test]
async fn dashboard_merges_and_formats_all_four_reads() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_table(
        "user_stats",
        json!([{
            "user_id": common::SUBJECT,
            "learning_hours": 24.5,
            "completed_sessions": 18,
            "skills_in_progress": 5,
            "network_growth": 12,
        }]),
    )
    .await;
    app.mock_table(
        "learning_paths",
        json!([{
            "id": "lp1",
            "title": "Full-Stack Web Development",
            "progress": 45,
            "completed_modules": 9,
            "total_modules": 20,
        }]),
    )
    .await;
    app.mock_table(
        "sessions",
        json!([{
            "id": "s1",
            "title": "JavaScript Fundamentals",
            "session_date": "2024-03-15T14:30:00",
            "duration": 45,
            "mentor": { "name": "Jane Doe", "avatar_url": "https://cdn.mentorhub.test/jane.png" },
        }]),
    )
    .await;
    app.mock_rpc(
        "get_recommended_mentors",
        json!([{
            "id": "m1",
            "name": "Dr. Emily Chen",
            "title": "Data Science Expert",
            "rating": 4.9,
            "reviews": 124,
            "skills": ["Machine Learning", "Python"],
            "hourly_rate": 75,
        }]),
    )
    .await;

    let res = get_dashboard(&app).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["stats"]["learning_hours"].as_f64(), Some(24.5));

    // Learning path rows pass through untransformed.
    assert_eq!(body["learning_paths"][0]["title"], "Full-Stack Web Development");
    assert_eq!(body["learning_paths"][0]["completed_modules"], 9);

    let session = &body["upcoming_sessions"][0];
    assert_eq!(session["mentorName"], "Jane Doe");
    assert_eq!(session["date"], "2024-03-15");
    assert_eq!(session["time"], "02:30 PM");
    assert_eq!(session["duration"], "45 min");
    assert_eq!(session["avatar"], "https://cdn.mentorhub.test/jane.png");

    let mentor = &body["recommended_mentors"][0];
    assert_eq!(mentor["name"], "Dr. Emily Chen");
    assert_eq!(mentor["rating"].as_f64(), Some(4.9));
    assert_eq!(mentor["hourlyRate"].as_f64(), Some(75.0));
    Ok(())
}

#[tokio::test]
async fn mentor_defaults_apply_end_to_end() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_table("user_stats", json!([])).await;
    app.mock_table("learning_paths", json!([])).await;
    app.mock_table("sessions", json!([])).await;
    app.mock_rpc(
        "get_recommended_mentors",
        json!([{ "id": "m9", "name": "Sam Mentor", "skills": null }]),
    )
    .await;

    let res = get_dashboard(&app).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    let mentor = &body["recommended_mentors"][0];
    assert_eq!(mentor["rating"].as_f64(), Some(4.5));
    assert_eq!(mentor["hourlyRate"].as_f64(), Some(50.0));
    assert_eq!(mentor["reviews"].as_i64(), Some(0));
    assert_eq!(mentor["skills"], json!([]));
    Ok(())
}

#[tokio::test]
async fn null_rpc_result_means_no_recommendations() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_table("user_stats", json!([])).await;
    app.mock_table("learning_paths", json!([])).await;
    app.mock_table("sessions", json!([])).await;
    app.mock_rpc("get_recommended_mentors", json!(null)).await;

    let res = get_dashboard(&app).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["recommended_mentors"], json!([]));
    Ok(())
}

#[tokio::test]
async fn downstream_failure_yields_the_500_envelope_and_no_partial_payload() -> Result<()> {
    let app = TestApp::spawn().await?;
    // user_stats succeeds, sessions fails: nothing from the earlier reads may
    // leak into the error response.
    app.mock_table("user_stats", json!([{ "learning_hours": 24.5 }])).await;
    app.mock_table("learning_paths", json!([])).await;
    app.mock_rpc("get_recommended_mentors", json!([])).await;
    // "sessions" is not mounted, so that read returns 404 from the mock.

    let res = get_dashboard(&app).await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    assert!(
        body["error"].as_str().is_some_and(|m| !m.is_empty()),
        "500 body should echo the failure: {}",
        body
    );
    assert!(body.get("stats").is_none(), "partial payload leaked: {}", body);
    Ok(())
}
