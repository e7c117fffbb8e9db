mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn every_project_carries_a_skills_array() -> Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(&app, common::get("/api/projects")).await?;
    assert_eq!(status, StatusCode::OK);

    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 2);
    for project in projects {
        assert!(project["skills"].is_array(), "skills must always be present");
    }
    Ok(())
}

#[tokio::test]
async fn project_without_associations_has_empty_skills_list() -> Result<()> {
    let app = common::test_app().await?;

    let payload = json!({"title": "Side Quest", "description": "No skills linked yet."});
    let (status, created) =
        common::send(&app, common::authed(Method::POST, "/api/projects", Some(&payload))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (_, body) = common::send(&app, common::get("/api/projects")).await?;
    let project = body
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == json!(id))
        .expect("created project missing from list")
        .clone();

    assert_eq!(project["skills"], json!([]));
    Ok(())
}

#[tokio::test]
async fn skill_filter_returns_a_matching_subset() -> Result<()> {
    let app = common::test_app().await?;

    let (_, all) = common::send(&app, common::get("/api/projects")).await?;
    let (status, filtered) =
        common::send(&app, common::get("/api/projects?skill=Docker")).await?;
    assert_eq!(status, StatusCode::OK);

    let all_ids: Vec<&Value> = all.as_array().unwrap().iter().map(|p| &p["id"]).collect();
    let filtered = filtered.as_array().unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["title"], "Portfolio API");
    for project in filtered {
        assert!(all_ids.contains(&&project["id"]), "filter must be a subset of the full list");
        let skills = project["skills"].as_array().unwrap();
        assert!(skills.iter().any(|s| s.as_str().unwrap().contains("Docker")));
    }
    Ok(())
}

#[tokio::test]
async fn skill_filter_matches_substrings_case_sensitively() -> Result<()> {
    let app = common::test_app().await?;

    // "Java" is a substring of the linked skill "JavaScript".
    let (_, body) = common::send(&app, common::get("/api/projects?skill=Java")).await?;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Lowercase must not match.
    let (status, body) = common::send(&app, common::get("/api/projects?skill=docker")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn search_requires_a_term() -> Result<()> {
    let app = common::test_app().await?;

    let (status, _) = common::send(&app, common::get("/api/search")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = common::send(&app, common::get("/api/search?q=")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn search_matches_title_and_description_substrings() -> Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(&app, common::get("/api/search?q=Portfolio")).await?;
    assert_eq!(status, StatusCode::OK);
    let hits = body["projects"].as_array().unwrap();
    assert!(hits.iter().any(|p| p["title"] == "Portfolio API"));

    // Description match.
    let (_, body) = common::send(&app, common::get("/api/search?q=snippets")).await?;
    assert!(body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["title"] == "Code Generation Service"));

    // Case-sensitive: lowercase misses the title.
    let (_, body) = common::send(&app, common::get("/api/search?q=portfolio")).await?;
    assert_eq!(body["projects"].as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn project_creation_requires_title_and_description() -> Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(
        &app,
        common::authed(Method::POST, "/api/projects", Some(&json!({"title": "X"}))),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("description"));
    Ok(())
}

#[tokio::test]
async fn project_update_round_trips_and_unknown_id_is_404() -> Result<()> {
    let app = common::test_app().await?;

    let payload = json!({"title": "Renamed", "description": "Still the same project."});
    let (status, _) = common::send(
        &app,
        common::authed(Method::PUT, "/api/projects/1", Some(&payload)),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::send(&app, common::get("/api/projects")).await?;
    assert!(body.as_array().unwrap().iter().any(|p| p["title"] == "Renamed"));

    let (status, _) = common::send(
        &app,
        common::authed(Method::PUT, "/api/projects/999999", Some(&payload)),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn deleting_a_project_removes_it_and_its_associations() -> Result<()> {
    let app = common::test_app().await?;

    let (_, all) = common::send(&app, common::get("/api/projects")).await?;
    let id = all
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["title"] == "Portfolio API")
        .map(|p| p["id"].as_i64().unwrap())
        .expect("seeded project missing");

    let (status, _) = common::send(
        &app,
        common::authed(Method::DELETE, &format!("/api/projects/{id}"), None),
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = common::send(&app, common::get("/api/projects")).await?;
    assert!(body.as_array().unwrap().iter().all(|p| p["id"] != json!(id)));

    // Its association rows are gone too: Docker was only used by that
    // project, so it can be deleted now.
    let (_, skills) = common::send(&app, common::get("/api/skills")).await?;
    let docker_id = skills
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == "Docker")
        .map(|s| s["id"].as_i64().unwrap())
        .unwrap();
    let (status, _) = common::send(
        &app,
        common::authed(Method::DELETE, &format!("/api/skills/{docker_id}"), None),
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn deleting_an_unknown_project_is_404() -> Result<()> {
    let app = common::test_app().await?;

    let (status, _) =
        common::send(&app, common::authed(Method::DELETE, "/api/projects/999999", None)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
