pub mod institution_repo;
pub mod project_repo;
pub mod region_repo;
pub mod risk_repo;

pub use institution_repo::InstitutionRepository;
pub use project_repo::ProjectRepository;
pub use region_repo::RegionRepository;
pub use risk_repo::RiskRepository;
