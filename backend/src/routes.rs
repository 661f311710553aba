use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{handlers, middleware, AppState};

/// Build the full API router with its middleware stack
pub fn create_router(app_state: AppState) -> Router {
    let cors_layer = middleware::create_cors_layer(app_state.config.cors_allow_origins.clone());

    Router::new()
        // Health check endpoints
        .route("/api/health", get(handlers::health_check))
        .route("/api/health/simple", get(handlers::health_check_simple))
        .route("/api/health/live", get(handlers::liveness_check))
        // Hierarchy browsing
        .route("/api/regions", get(handlers::region_handlers::list_regions))
        .route(
            "/api/regions/:id/institutions",
            get(handlers::region_handlers::list_region_institutions),
        )
        .route(
            "/api/institutions/:id/projects",
            get(handlers::institution_handlers::list_institution_projects),
        )
        // Risks and SWOT
        .route(
            "/api/projects/:id/risks",
            get(handlers::project_handlers::list_project_risks)
                .post(handlers::project_handlers::create_project_risk),
        )
        .route(
            "/api/projects/:id/swot/generate",
            post(handlers::project_handlers::generate_swot),
        )
        .route(
            "/api/risks/:id",
            patch(handlers::risk_handlers::update_risk)
                .delete(handlers::risk_handlers::delete_risk),
        )
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::security_headers_middleware))
        .layer(axum::middleware::from_fn(middleware::request_logging_middleware))
        .layer(middleware::create_logging_layer())
        .layer(cors_layer)
}
