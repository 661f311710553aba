pub mod risk_service;
pub mod swot_service;

// Re-export commonly used types
pub use risk_service::{is_high_risk, RiskService, HIGH_RISK_THRESHOLD};
pub use swot_service::{derive_swot, SwotService};
