use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::{
    error::ApiError,
    handlers::RecordId,
    models::{RiskUpdate, ScoredRisk},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateRiskRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub likelihood: Option<i32>,
    pub impact: Option<i32>,
}

/// PATCH /api/risks/:id - Update a risk assessment; the returned score reflects the change
pub async fn update_risk(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    Json(payload): Json<UpdateRiskRequest>,
) -> Result<Json<ScoredRisk>, ApiError> {
    let id = id.ok_or_else(|| ApiError::not_found("Risk not found"))?;
    let update = RiskUpdate {
        title: payload.title,
        category: payload.category,
        likelihood: payload.likelihood,
        impact: payload.impact,
    };
    let risk = app_state.risk_service.update_risk(id, update).await?;
    Ok(Json(risk))
}

/// DELETE /api/risks/:id - Remove a risk
pub async fn delete_risk(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    let id = id.ok_or_else(|| ApiError::not_found("Risk not found"))?;
    app_state.risk_service.delete_risk(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
