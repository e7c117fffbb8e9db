use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::WorkExperience;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::WorkService;
use crate::state::AppState;

use super::RequiredFields;

#[derive(Debug, Deserialize)]
pub struct WorkPayload {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// POST /api/work - add a work-experience entry
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<WorkPayload>,
) -> ApiResult<WorkExperience> {
    let mut fields = RequiredFields::new();
    let company = fields.text(&payload.company, "company");
    let position = fields.text(&payload.position, "position");
    fields.check()?;

    let entry = WorkService::new(state.pool.clone())
        .create(
            company,
            position,
            payload.start_date.as_deref(),
            payload.end_date.as_deref(),
            payload.description.as_deref(),
        )
        .await?;

    Ok(ApiResponse::created(entry))
}

/// PUT /api/work/:id - update a work-experience entry
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<WorkPayload>,
) -> ApiResult<Value> {
    let mut fields = RequiredFields::new();
    let company = fields.text(&payload.company, "company");
    let position = fields.text(&payload.position, "position");
    fields.check()?;

    WorkService::new(state.pool.clone())
        .update(
            id,
            company,
            position,
            payload.start_date.as_deref(),
            payload.end_date.as_deref(),
            payload.description.as_deref(),
        )
        .await?;

    Ok(ApiResponse::success(json!({ "message": "work entry updated" })))
}

/// DELETE /api/work/:id - remove a work-experience entry
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    WorkService::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::no_content())
}
