use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::ProfileAggregate;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::ProfileService;
use crate::state::AppState;

use super::RequiredFields;

#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

/// GET /api/profile - profile with education and work history
pub async fn get(State(state): State<AppState>) -> ApiResult<ProfileAggregate> {
    let aggregate = ProfileService::new(state.pool.clone()).aggregate().await?;
    Ok(ApiResponse::success(aggregate))
}

/// PUT /api/profile - update the singleton profile row
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<ProfilePayload>,
) -> ApiResult<Value> {
    let mut fields = RequiredFields::new();
    let name = fields.text(&payload.name, "name");
    let email = fields.text(&payload.email, "email");
    fields.check()?;

    ProfileService::new(state.pool.clone())
        .update(
            name,
            email,
            payload.github_url.as_deref(),
            payload.linkedin_url.as_deref(),
            payload.portfolio_url.as_deref(),
        )
        .await?;

    Ok(ApiResponse::success(json!({ "message": "profile updated" })))
}
