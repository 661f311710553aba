use serde::{Deserialize, Serialize};

/// Lifecycle stage of a project. Unknown stages are kept verbatim so they
/// round-trip through the API unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Idea,
    Scoping,
    Running,
    Approved,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Idea => "idea",
            ProjectStatus::Scoping => "scoping",
            ProjectStatus::Running => "running",
            ProjectStatus::Approved => "approved",
            ProjectStatus::Other(raw) => raw,
        }
    }

    /// Running and approved projects have institutional backing
    pub fn is_committed(&self) -> bool {
        matches!(self, ProjectStatus::Running | ProjectStatus::Approved)
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "idea" => ProjectStatus::Idea,
            "scoping" => ProjectStatus::Scoping,
            "running" => ProjectStatus::Running,
            "approved" => ProjectStatus::Approved,
            _ => ProjectStatus::Other(raw),
        }
    }
}

impl From<&str> for ProjectStatus {
    fn from(raw: &str) -> Self {
        ProjectStatus::from(raw.to_string())
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub institution_id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
}
