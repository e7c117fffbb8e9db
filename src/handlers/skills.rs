use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{Skill, TopSkill};
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::SkillService;
use crate::state::AppState;

use super::RequiredFields;

/// How many rows `GET /api/skills/top` returns at most.
const TOP_SKILLS_LIMIT: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct SkillPayload {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// GET /api/skills - all skills, name ascending
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Skill>> {
    let skills = SkillService::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(skills))
}

/// GET /api/skills/top - most-used skills with their project counts
pub async fn top(State(state): State<AppState>) -> ApiResult<Vec<TopSkill>> {
    let skills = SkillService::new(state.pool.clone()).top(TOP_SKILLS_LIMIT).await?;
    Ok(ApiResponse::success(skills))
}

/// POST /api/skills - create a skill
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SkillPayload>,
) -> ApiResult<Skill> {
    let mut fields = RequiredFields::new();
    let name = fields.text(&payload.name, "name");
    fields.check()?;

    let skill = SkillService::new(state.pool.clone())
        .create(name, payload.category.as_deref())
        .await?;

    Ok(ApiResponse::created(skill))
}

/// PUT /api/skills/:id - rename or recategorize a skill
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SkillPayload>,
) -> ApiResult<Value> {
    let mut fields = RequiredFields::new();
    let name = fields.text(&payload.name, "name");
    fields.check()?;

    SkillService::new(state.pool.clone())
        .update(id, name, payload.category.as_deref())
        .await?;

    Ok(ApiResponse::success(json!({ "message": "skill updated" })))
}

/// DELETE /api/skills/:id - remove a skill unless a project still uses it
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    SkillService::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::no_content())
}
