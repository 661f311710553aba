use async_trait::async_trait;

use crate::{error::ApiError, models::Project, store::DataStore};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Projects run by an institution; an unknown institution yields an empty list
    async fn list_by_institution(&self, institution_id: i64) -> Result<Vec<Project>, ApiError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Project>, ApiError>;
}

pub struct MemoryProjectRepository {
    store: DataStore,
}

impl MemoryProjectRepository {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn list_by_institution(&self, institution_id: i64) -> Result<Vec<Project>, ApiError> {
        Ok(self
            .store
            .snapshot()
            .projects
            .iter()
            .filter(|p| p.institution_id == institution_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Project>, ApiError> {
        Ok(self
            .store
            .snapshot()
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}
