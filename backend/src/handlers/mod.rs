pub mod health_handlers;
pub mod institution_handlers;
pub mod path_id;
pub mod project_handlers;
pub mod region_handlers;
pub mod risk_handlers;

pub use health_handlers::{health_check, health_check_simple, liveness_check};
pub use path_id::RecordId;
