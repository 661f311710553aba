use axum::{extract::State, response::Json};

use crate::{error::ApiError, handlers::RecordId, models::Project, AppState};

/// GET /api/institutions/:id/projects - List projects run by an institution
pub async fn list_institution_projects(
    State(app_state): State<AppState>,
    RecordId(institution_id): RecordId,
) -> Result<Json<Vec<Project>>, ApiError> {
    let Some(institution_id) = institution_id else {
        return Ok(Json(Vec::new()));
    };

    let projects = app_state
        .project_repository
        .list_by_institution(institution_id)
        .await?;
    Ok(Json(projects))
}
