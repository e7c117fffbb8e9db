mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn profile_aggregate_has_flattened_profile_and_histories() -> Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(&app, common::get("/api/profile")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alex Doe");
    assert_eq!(body["email"], "alex.doe@example.com");
    assert!(body["education"].as_array().is_some_and(|e| !e.is_empty()));
    assert!(body["work_experience"].as_array().is_some_and(|w| !w.is_empty()));
    Ok(())
}

#[tokio::test]
async fn education_is_ordered_by_end_year_descending() -> Result<()> {
    let app = common::test_app().await?;

    // Seed holds one entry ending 2021; add one earlier and one later.
    for (degree, end_year) in [("M.Sc.", 2025), ("High School Diploma", 2017)] {
        let payload = json!({
            "institution": "Somewhere",
            "degree": degree,
            "start_year": end_year - 2,
            "end_year": end_year,
        });
        let (status, _) = common::send(
            &app,
            common::authed(Method::POST, "/api/education", Some(&payload)),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = common::send(&app, common::get("/api/profile")).await?;
    let years: Vec<i64> = body["education"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["end_year"].as_i64().unwrap())
        .collect();

    assert_eq!(years, vec![2025, 2021, 2017]);
    Ok(())
}

#[tokio::test]
async fn work_history_is_ordered_by_start_date_descending() -> Result<()> {
    let app = common::test_app().await?;

    // Seed holds one entry starting 2021-07-01.
    for start_date in ["2024-01-15", "2018-03-01"] {
        let payload = json!({
            "company": "Acme",
            "position": "Engineer",
            "start_date": start_date,
        });
        let (status, _) =
            common::send(&app, common::authed(Method::POST, "/api/work", Some(&payload))).await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = common::send(&app, common::get("/api/profile")).await?;
    let starts: Vec<String> = body["work_experience"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["start_date"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(starts, vec!["2024-01-15", "2021-07-01", "2018-03-01"]);
    Ok(())
}

#[tokio::test]
async fn profile_update_round_trips() -> Result<()> {
    let app = common::test_app().await?;

    let payload = json!({
        "name": "Jordan Smith",
        "email": "jordan@example.com",
        "github_url": "https://github.com/jsmith",
        "linkedin_url": "https://www.linkedin.com/in/jsmith",
        "portfolio_url": "https://jsmith.dev",
    });
    let (status, body) =
        common::send(&app, common::authed(Method::PUT, "/api/profile", Some(&payload))).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, body) = common::send(&app, common::get("/api/profile")).await?;
    assert_eq!(body["name"], "Jordan Smith");
    assert_eq!(body["email"], "jordan@example.com");
    assert_eq!(body["github_url"], "https://github.com/jsmith");
    Ok(())
}

#[tokio::test]
async fn profile_update_requires_name_and_email() -> Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(
        &app,
        common::authed(Method::PUT, "/api/profile", Some(&json!({"name": "Jordan"}))),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));
    Ok(())
}
