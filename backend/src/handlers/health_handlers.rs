use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::{error::ApiError, store, AppState};

/// Health check endpoint including data store status
pub async fn health_check(State(app_state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let store_status = check_store_health(&app_state);

    if !store_status["healthy"].as_bool().unwrap_or(false) {
        return Err(ApiError::internal("Service is unhealthy"));
    }

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio-backend",
        "checks": {
            "store": store_status
        }
    })))
}

/// Simple health check endpoint for load balancers
pub async fn health_check_simple() -> Result<&'static str, StatusCode> {
    Ok("OK")
}

fn check_store_health(app_state: &AppState) -> Value {
    match store::health_check(&app_state.store) {
        Ok(()) => {
            let snapshot = app_state.store.snapshot();
            json!({
                "healthy": true,
                "regions": snapshot.regions.len(),
                "institutions": snapshot.institutions.len(),
                "projects": snapshot.projects.len(),
                "risks": snapshot.risks.len(),
            })
        }
        Err(e) => {
            tracing::error!("Data store health check failed: {}", e);
            json!({
                "healthy": false,
                "error": e.to_string()
            })
        }
    }
}

/// Liveness check endpoint; responding at all means the process is alive
pub async fn liveness_check() -> Json<Value> {
    Json(json!({
        "alive": true,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
