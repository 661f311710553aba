use async_trait::async_trait;

use crate::{error::ApiError, models::Institution, store::DataStore};

#[async_trait]
pub trait InstitutionRepository: Send + Sync {
    /// Institutions belonging to a region; an unknown region yields an empty list
    async fn list_by_region(&self, region_id: i64) -> Result<Vec<Institution>, ApiError>;
}

pub struct MemoryInstitutionRepository {
    store: DataStore,
}

impl MemoryInstitutionRepository {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InstitutionRepository for MemoryInstitutionRepository {
    async fn list_by_region(&self, region_id: i64) -> Result<Vec<Institution>, ApiError> {
        Ok(self
            .store
            .snapshot()
            .institutions
            .iter()
            .filter(|i| i.region_id == region_id)
            .cloned()
            .collect())
    }
}
