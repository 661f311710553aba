use async_trait::async_trait;

use crate::{error::ApiError, models::Region, store::DataStore};

#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Region>, ApiError>;
}

pub struct MemoryRegionRepository {
    store: DataStore,
}

impl MemoryRegionRepository {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RegionRepository for MemoryRegionRepository {
    async fn list(&self) -> Result<Vec<Region>, ApiError> {
        Ok(self.store.snapshot().regions.clone())
    }
}
