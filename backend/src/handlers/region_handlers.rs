use axum::{extract::State, response::Json};

use crate::{
    error::ApiError,
    handlers::RecordId,
    models::{Institution, Region},
    AppState,
};

/// GET /api/regions - List all regions
pub async fn list_regions(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Region>>, ApiError> {
    let regions = app_state.region_repository.list().await?;
    Ok(Json(regions))
}

/// GET /api/regions/:id/institutions - List institutions in a region
pub async fn list_region_institutions(
    State(app_state): State<AppState>,
    RecordId(region_id): RecordId,
) -> Result<Json<Vec<Institution>>, ApiError> {
    let Some(region_id) = region_id else {
        return Ok(Json(Vec::new()));
    };

    let institutions = app_state
        .institution_repository
        .list_by_region(region_id)
        .await?;
    Ok(Json(institutions))
}
