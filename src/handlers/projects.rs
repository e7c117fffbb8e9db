use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{Project, ProjectWithSkills};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::ProjectService;
use crate::state::AppState;

use super::RequiredFields;

#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub repo_link: Option<String>,
    pub live_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict to projects tagged with a skill whose name contains this
    /// substring.
    pub skill: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /api/projects[?skill=] - projects with their skill names
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<ProjectWithSkills>> {
    let projects = ProjectService::new(state.pool.clone())
        .list(query.skill.as_deref())
        .await?;
    Ok(ApiResponse::success(projects))
}

/// GET /api/search?q= - projects whose title or description contains the term
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Value> {
    let term = match query.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => {
            return Err(ApiError::validation_error(
                "query parameter 'q' is required",
                None,
            ))
        }
    };

    let projects = ProjectService::new(state.pool.clone()).search(term).await?;
    Ok(ApiResponse::success(json!({ "projects": projects })))
}

/// POST /api/projects - create a project
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> ApiResult<Project> {
    let mut fields = RequiredFields::new();
    let title = fields.text(&payload.title, "title");
    let description = fields.text(&payload.description, "description");
    fields.check()?;

    let project = ProjectService::new(state.pool.clone())
        .create(
            title,
            description,
            payload.repo_link.as_deref(),
            payload.live_link.as_deref(),
        )
        .await?;

    Ok(ApiResponse::created(project))
}

/// PUT /api/projects/:id - update a project
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectPayload>,
) -> ApiResult<Value> {
    let mut fields = RequiredFields::new();
    let title = fields.text(&payload.title, "title");
    let description = fields.text(&payload.description, "description");
    fields.check()?;

    ProjectService::new(state.pool.clone())
        .update(
            id,
            title,
            description,
            payload.repo_link.as_deref(),
            payload.live_link.as_deref(),
        )
        .await?;

    Ok(ApiResponse::success(json!({ "message": "project updated" })))
}

/// DELETE /api/projects/:id - remove a project and its skill associations
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    ProjectService::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::no_content())
}
