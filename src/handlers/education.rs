use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Education;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::EducationService;
use crate::state::AppState;

use super::RequiredFields;

#[derive(Debug, Deserialize)]
pub struct EducationPayload {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
}

/// POST /api/education - add an education entry
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EducationPayload>,
) -> ApiResult<Education> {
    let mut fields = RequiredFields::new();
    let institution = fields.text(&payload.institution, "institution");
    let degree = fields.text(&payload.degree, "degree");
    fields.check()?;

    let entry = EducationService::new(state.pool.clone())
        .create(institution, degree, payload.start_year, payload.end_year)
        .await?;

    Ok(ApiResponse::created(entry))
}

/// PUT /api/education/:id - update an education entry
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EducationPayload>,
) -> ApiResult<Value> {
    let mut fields = RequiredFields::new();
    let institution = fields.text(&payload.institution, "institution");
    let degree = fields.text(&payload.degree, "degree");
    fields.check()?;

    EducationService::new(state.pool.clone())
        .update(id, institution, degree, payload.start_year, payload.end_year)
        .await?;

    Ok(ApiResponse::success(json!({ "message": "education entry updated" })))
}

/// DELETE /api/education/:id - remove an education entry
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    EducationService::new(state.pool.clone()).delete(id).await?;
    Ok(ApiResponse::no_content())
}
