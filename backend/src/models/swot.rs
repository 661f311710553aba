use serde::{Deserialize, Serialize};

/// Placeholder used for a SWOT category with no generated statements
pub const SWOT_PLACEHOLDER: &str = "TBD";

/// Qualitative assessment of a project, one text block per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swot {
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
}
