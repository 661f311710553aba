use std::sync::Arc;

use crate::{
    config::Settings,
    repositories::{
        institution_repo::MemoryInstitutionRepository, project_repo::MemoryProjectRepository,
        region_repo::MemoryRegionRepository, risk_repo::MemoryRiskRepository,
        InstitutionRepository, ProjectRepository, RegionRepository, RiskRepository,
    },
    services::{RiskService, SwotService},
    store::DataStore,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod store;

pub use routes::create_router;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub store: DataStore,
    pub region_repository: Arc<dyn RegionRepository + Send + Sync>,
    pub institution_repository: Arc<dyn InstitutionRepository + Send + Sync>,
    pub project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    pub risk_service: Arc<RiskService>,
    pub swot_service: Arc<SwotService>,
}

impl AppState {
    /// Create application state, seeding the store according to configuration
    pub fn new(config: Settings) -> Self {
        let store = crate::store::create_store(config.seed_mock_data);
        Self::new_with_store(config, store)
    }

    /// Create application state over an existing store
    pub fn new_with_store(config: Settings, store: DataStore) -> Self {
        let region_repository: Arc<dyn RegionRepository + Send + Sync> =
            Arc::new(MemoryRegionRepository::new(store.clone()));
        let institution_repository: Arc<dyn InstitutionRepository + Send + Sync> =
            Arc::new(MemoryInstitutionRepository::new(store.clone()));
        let project_repository: Arc<dyn ProjectRepository + Send + Sync> =
            Arc::new(MemoryProjectRepository::new(store.clone()));
        let risk_repository: Arc<dyn RiskRepository + Send + Sync> =
            Arc::new(MemoryRiskRepository::new(store.clone()));

        let risk_service = Arc::new(RiskService::new(risk_repository.clone()));
        let swot_service = Arc::new(SwotService::new(
            project_repository.clone(),
            risk_repository,
        ));

        Self {
            config: Arc::new(config),
            store,
            region_repository,
            institution_repository,
            project_repository,
            risk_service,
            swot_service,
        }
    }
}
