use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex};

use crate::{
    error::ApiError,
    models::{Institution, Project, ProjectStatus, Region, Risk},
};

/// One consistent version of all four collections
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub regions: Vec<Region>,
    pub institutions: Vec<Institution>,
    pub projects: Vec<Project>,
    pub risks: Vec<Risk>,
}

impl Dataset {
    /// Fixture the service starts with when seeding is enabled
    pub fn mock() -> Self {
        Self {
            regions: vec![
                region(1, "South East Asia", "Thailand, Myanmar, Vietnam, etc."),
                region(2, "India", "India regional card"),
            ],
            institutions: vec![
                institution(1, 1, "Thai Partner University", "Main Thailand/Myanmar campus."),
                institution(2, 2, "Indian Partner University", "Pilot campus in India."),
            ],
            projects: vec![
                project(
                    1,
                    1,
                    "TWU–Thailand Exchange",
                    "Short programs and student exchange.",
                    ProjectStatus::Running,
                ),
                project(
                    2,
                    1,
                    "Joint Leadership Program",
                    "Joint/twinning degree concept.",
                    ProjectStatus::Scoping,
                ),
                project(
                    3,
                    2,
                    "India Pathway Pilot",
                    "Pathway for Indian students.",
                    ProjectStatus::Idea,
                ),
            ],
            risks: vec![
                risk(1, 1, "Visa delays", "operational", 3, 3),
                risk(2, 1, "Political instability", "geo", 4, 4),
                risk(3, 2, "Low initial enrolment", "financial", 3, 4),
            ],
        }
    }
}

fn region(id: i64, name: &str, description: &str) -> Region {
    Region {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

fn institution(id: i64, region_id: i64, name: &str, notes: &str) -> Institution {
    Institution {
        id,
        region_id,
        name: name.to_string(),
        notes: Some(notes.to_string()),
    }
}

fn project(
    id: i64,
    institution_id: i64,
    title: &str,
    description: &str,
    status: ProjectStatus,
) -> Project {
    Project {
        id,
        institution_id,
        title: title.to_string(),
        description: Some(description.to_string()),
        status,
    }
}

fn risk(
    id: i64,
    project_id: i64,
    title: &str,
    category: &str,
    likelihood: i32,
    impact: i32,
) -> Risk {
    Risk {
        id,
        project_id,
        title: title.to_string(),
        category: category.to_string(),
        likelihood,
        impact,
    }
}

/// In-memory store. Readers get an immutable snapshot; writers are serialized
/// and publish a whole new dataset, so no partial update is ever visible.
pub struct MemoryStore {
    current: ArcSwap<Dataset>,
    write_lock: Mutex<()>,
}

pub type DataStore = Arc<MemoryStore>;

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: ArcSwap::from_pointee(dataset),
            write_lock: Mutex::new(()),
        }
    }

    /// Current snapshot; stays valid even if a write lands afterwards
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.current.load_full()
    }

    /// Apply `mutate` to a copy of the current dataset and publish it if it succeeds
    pub fn write<T, F>(&self, mutate: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Dataset) -> Result<T, ApiError>,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ApiError::internal("Data store writer lock poisoned"))?;

        let mut next = Dataset::clone(&self.current.load());
        let output = mutate(&mut next)?;
        self.current.store(Arc::new(next));

        Ok(output)
    }
}

pub fn create_store(seed_mock_data: bool) -> DataStore {
    let dataset = if seed_mock_data {
        Dataset::mock()
    } else {
        Dataset::default()
    };

    tracing::info!(
        regions = dataset.regions.len(),
        institutions = dataset.institutions.len(),
        projects = dataset.projects.len(),
        risks = dataset.risks.len(),
        "data store initialized"
    );

    Arc::new(MemoryStore::new(dataset))
}

/// Cheap readiness probe used by the health endpoints
pub fn health_check(store: &MemoryStore) -> Result<(), ApiError> {
    if store.write_lock.is_poisoned() {
        return Err(ApiError::internal("Data store writer lock poisoned"));
    }
    Ok(())
}
