use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::{
    error::ApiError,
    handlers::RecordId,
    models::{RiskCreate, ScoredRisk, Swot},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateRiskRequest {
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub likelihood: i32,
    pub impact: i32,
}

/// GET /api/projects/:id/risks - List a project's risks with computed scores
pub async fn list_project_risks(
    State(app_state): State<AppState>,
    RecordId(project_id): RecordId,
) -> Result<Json<Vec<ScoredRisk>>, ApiError> {
    let Some(project_id) = project_id else {
        return Ok(Json(Vec::new()));
    };

    let risks = app_state.risk_service.list_project_risks(project_id).await?;
    Ok(Json(risks))
}

/// POST /api/projects/:id/risks - Record a new risk against a project
pub async fn create_project_risk(
    State(app_state): State<AppState>,
    RecordId(project_id): RecordId,
    Json(payload): Json<CreateRiskRequest>,
) -> Result<(StatusCode, Json<ScoredRisk>), ApiError> {
    let project_id = project_id.ok_or_else(|| ApiError::not_found("Project not found"))?;

    let risk = app_state
        .risk_service
        .create_risk(
            project_id,
            RiskCreate {
                title: payload.title,
                category: payload.category,
                likelihood: payload.likelihood,
                impact: payload.impact,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(risk)))
}

/// POST /api/projects/:id/swot/generate - Derive a SWOT summary for a project
pub async fn generate_swot(
    State(app_state): State<AppState>,
    RecordId(project_id): RecordId,
) -> Result<Json<Swot>, ApiError> {
    let project_id = project_id.ok_or_else(|| ApiError::not_found("Project not found"))?;
    let swot = app_state.swot_service.generate(project_id).await?;
    Ok(Json(swot))
}
