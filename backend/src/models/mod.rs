pub mod institution;
pub mod project;
pub mod region;
pub mod risk;
pub mod swot;

// Re-export commonly used types
pub use institution::*;
pub use project::*;
pub use region::*;
pub use risk::*;
pub use swot::*;
