use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{ProjectStatus, ScoredRisk, Swot, SWOT_PLACEHOLDER},
    repositories::{ProjectRepository, RiskRepository},
    services::risk_service::is_high_risk,
};

pub const COMMITMENT_STRENGTH: &str =
    "Project has institutional approval and is in operation, showing existing commitment.";
pub const NOT_APPROVED_WEAKNESS: &str =
    "Project is not yet fully approved or launched, which may delay impact.";
pub const NO_RISKS_WEAKNESS: &str =
    "No risks are documented yet, which may hide unassessed exposure.";
pub const COLLABORATION_OPPORTUNITY: &str =
    "Project can strengthen TWU presence and collaboration in this region.";

pub fn high_risk_threat(count: usize) -> String {
    format!(
        "There are {} high-scoring risks that require mitigation.",
        count
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwotCategory {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

/// Inputs every rule sees
pub struct SwotContext<'a> {
    pub status: &'a ProjectStatus,
    pub risks: &'a [ScoredRisk],
}

impl SwotContext<'_> {
    pub fn high_risk_count(&self) -> usize {
        self.risks.iter().filter(|r| is_high_risk(r.score)).count()
    }
}

/// A rule contributes at most one statement to one category
pub struct SwotRule {
    pub name: &'static str,
    pub evaluate: fn(&SwotContext<'_>) -> Option<(SwotCategory, String)>,
}

/// Evaluated in this order; statement order within a category follows it.
pub const SWOT_RULES: &[SwotRule] = &[
    SwotRule {
        name: "approval_status",
        evaluate: |ctx| {
            if ctx.status.is_committed() {
                Some((SwotCategory::Strengths, COMMITMENT_STRENGTH.to_string()))
            } else {
                Some((SwotCategory::Weaknesses, NOT_APPROVED_WEAKNESS.to_string()))
            }
        },
    },
    SwotRule {
        name: "high_risks",
        evaluate: |ctx| match ctx.high_risk_count() {
            0 => None,
            count => Some((SwotCategory::Threats, high_risk_threat(count))),
        },
    },
    SwotRule {
        name: "undocumented_risks",
        evaluate: |ctx| {
            ctx.risks
                .is_empty()
                .then(|| (SwotCategory::Weaknesses, NO_RISKS_WEAKNESS.to_string()))
        },
    },
    SwotRule {
        name: "regional_collaboration",
        evaluate: |_| {
            Some((
                SwotCategory::Opportunities,
                COLLABORATION_OPPORTUNITY.to_string(),
            ))
        },
    },
];

#[derive(Debug, Default)]
struct SwotAccumulator {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    opportunities: Vec<String>,
    threats: Vec<String>,
}

impl SwotAccumulator {
    fn push(&mut self, category: SwotCategory, statement: String) {
        let bucket = match category {
            SwotCategory::Strengths => &mut self.strengths,
            SwotCategory::Weaknesses => &mut self.weaknesses,
            SwotCategory::Opportunities => &mut self.opportunities,
            SwotCategory::Threats => &mut self.threats,
        };
        bucket.push(statement);
    }

    fn finish(self) -> Swot {
        Swot {
            strengths: join_or_placeholder(self.strengths),
            weaknesses: join_or_placeholder(self.weaknesses),
            opportunities: join_or_placeholder(self.opportunities),
            threats: join_or_placeholder(self.threats),
        }
    }
}

fn join_or_placeholder(statements: Vec<String>) -> String {
    if statements.is_empty() {
        SWOT_PLACEHOLDER.to_string()
    } else {
        statements.join("\n")
    }
}

/// Pure derivation: same status and risks always give the same Swot
pub fn derive_swot(status: &ProjectStatus, risks: &[ScoredRisk]) -> Swot {
    let ctx = SwotContext { status, risks };
    let mut acc = SwotAccumulator::default();

    for rule in SWOT_RULES {
        if let Some((category, statement)) = (rule.evaluate)(&ctx) {
            tracing::trace!(rule = rule.name, ?category, "swot rule fired");
            acc.push(category, statement);
        }
    }

    acc.finish()
}

pub struct SwotService {
    project_repo: Arc<dyn ProjectRepository + Send + Sync>,
    risk_repo: Arc<dyn RiskRepository + Send + Sync>,
}

impl SwotService {
    pub fn new(
        project_repo: Arc<dyn ProjectRepository + Send + Sync>,
        risk_repo: Arc<dyn RiskRepository + Send + Sync>,
    ) -> Self {
        Self {
            project_repo,
            risk_repo,
        }
    }

    /// Generate a SWOT for a project from its status and current risk scores
    pub async fn generate(&self, project_id: i64) -> Result<Swot, ApiError> {
        let project = self
            .project_repo
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

        let risks: Vec<ScoredRisk> = self
            .risk_repo
            .list_by_project(project_id)
            .await?
            .into_iter()
            .map(ScoredRisk::from)
            .collect();

        let swot = derive_swot(&project.status, &risks);

        tracing::info!(
            project_id = project_id,
            status = %project.status,
            risk_count = risks.len(),
            "swot generated"
        );

        Ok(swot)
    }
}
