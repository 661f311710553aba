use async_trait::async_trait;

use crate::{
    error::ApiError,
    models::{Risk, RiskCreate, RiskUpdate},
    store::DataStore,
};

#[async_trait]
pub trait RiskRepository: Send + Sync {
    /// Risks recorded against a project; an unknown project yields an empty list
    async fn list_by_project(&self, project_id: i64) -> Result<Vec<Risk>, ApiError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Risk>, ApiError>;
    async fn create(&self, project_id: i64, risk: &RiskCreate) -> Result<Risk, ApiError>;
    async fn update(&self, id: i64, update: &RiskUpdate) -> Result<Risk, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

pub struct MemoryRiskRepository {
    store: DataStore,
}

impl MemoryRiskRepository {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RiskRepository for MemoryRiskRepository {
    async fn list_by_project(&self, project_id: i64) -> Result<Vec<Risk>, ApiError> {
        Ok(self
            .store
            .snapshot()
            .risks
            .iter()
            .filter(|r| r.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Risk>, ApiError> {
        Ok(self
            .store
            .snapshot()
            .risks
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn create(&self, project_id: i64, risk: &RiskCreate) -> Result<Risk, ApiError> {
        self.store.write(|data| {
            // Parent check happens inside the write so it cannot race a delete
            if !data.projects.iter().any(|p| p.id == project_id) {
                return Err(ApiError::not_found(format!(
                    "Project {} not found",
                    project_id
                )));
            }

            let id = data.risks.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            let created = Risk {
                id,
                project_id,
                title: risk.title.clone(),
                category: risk.category.clone(),
                likelihood: risk.likelihood,
                impact: risk.impact,
            };
            data.risks.push(created.clone());

            Ok(created)
        })
    }

    async fn update(&self, id: i64, update: &RiskUpdate) -> Result<Risk, ApiError> {
        self.store.write(|data| {
            let risk = data
                .risks
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ApiError::not_found(format!("Risk {} not found", id)))?;

            update.apply(risk);
            Ok(risk.clone())
        })
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.store.write(|data| {
            let before = data.risks.len();
            data.risks.retain(|r| r.id != id);

            if data.risks.len() == before {
                return Err(ApiError::not_found(format!("Risk {} not found", id)));
            }
            Ok(())
        })
    }
}
