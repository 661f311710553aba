use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{ScoredRisk, RiskCreate, RiskUpdate, MAX_RATING, MIN_RATING},
    repositories::RiskRepository,
};

/// Scores at or above this value count as high risks
pub const HIGH_RISK_THRESHOLD: i32 = 9;

pub fn is_high_risk(score: i32) -> bool {
    score >= HIGH_RISK_THRESHOLD
}

pub struct RiskService {
    risk_repo: Arc<dyn RiskRepository + Send + Sync>,
}

impl RiskService {
    pub fn new(risk_repo: Arc<dyn RiskRepository + Send + Sync>) -> Self {
        Self { risk_repo }
    }

    /// Risks of a project, each decorated with a freshly computed score
    pub async fn list_project_risks(&self, project_id: i64) -> Result<Vec<ScoredRisk>, ApiError> {
        let risks = self.risk_repo.list_by_project(project_id).await?;
        Ok(risks.into_iter().map(ScoredRisk::from).collect())
    }

    pub async fn create_risk(
        &self,
        project_id: i64,
        risk: RiskCreate,
    ) -> Result<ScoredRisk, ApiError> {
        validate_title(&risk.title)?;
        validate_rating("likelihood", risk.likelihood)?;
        validate_rating("impact", risk.impact)?;

        let created = self.risk_repo.create(project_id, &risk).await?;

        tracing::info!(
            risk_id = created.id,
            project_id = project_id,
            score = created.score(),
            "risk created"
        );

        Ok(ScoredRisk::from(created))
    }

    pub async fn update_risk(&self, id: i64, update: RiskUpdate) -> Result<ScoredRisk, ApiError> {
        if let Some(title) = &update.title {
            validate_title(title)?;
        }
        if let Some(likelihood) = update.likelihood {
            validate_rating("likelihood", likelihood)?;
        }
        if let Some(impact) = update.impact {
            validate_rating("impact", impact)?;
        }

        let updated = self.risk_repo.update(id, &update).await?;

        tracing::info!(
            risk_id = id,
            likelihood = updated.likelihood,
            impact = updated.impact,
            score = updated.score(),
            "risk updated"
        );

        Ok(ScoredRisk::from(updated))
    }

    pub async fn delete_risk(&self, id: i64) -> Result<(), ApiError> {
        self.risk_repo.delete(id).await?;
        tracing::info!(risk_id = id, "risk deleted");
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::validation("Risk title cannot be empty"));
    }
    Ok(())
}

fn validate_rating(field: &str, value: i32) -> Result<(), ApiError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(ApiError::validation(format!(
            "{} must be between {} and {}, got {}",
            field, MIN_RATING, MAX_RATING, value
        )));
    }
    Ok(())
}
