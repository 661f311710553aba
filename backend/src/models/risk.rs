use serde::{Deserialize, Serialize};

/// Lowest accepted likelihood / impact rating
pub const MIN_RATING: i32 = 1;
/// Highest accepted likelihood / impact rating
pub const MAX_RATING: i32 = 5;

/// Severity proxy for a risk: likelihood × impact
pub fn risk_score(likelihood: i32, impact: i32) -> i32 {
    likelihood.saturating_mul(impact)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub category: String,
    pub likelihood: i32,
    pub impact: i32,
}

impl Risk {
    /// Computed on every call, never stored
    pub fn score(&self) -> i32 {
        risk_score(self.likelihood, self.impact)
    }
}

/// A risk decorated with its score, as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRisk {
    #[serde(flatten)]
    pub risk: Risk,
    pub score: i32,
}

impl From<Risk> for ScoredRisk {
    fn from(risk: Risk) -> Self {
        let score = risk.score();
        Self { risk, score }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCreate {
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub likelihood: i32,
    pub impact: i32,
}

/// Partial update of a risk assessment; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub likelihood: Option<i32>,
    pub impact: Option<i32>,
}

impl RiskUpdate {
    pub fn apply(&self, risk: &mut Risk) {
        if let Some(title) = &self.title {
            risk.title = title.clone();
        }
        if let Some(category) = &self.category {
            risk.category = category.clone();
        }
        if let Some(likelihood) = self.likelihood {
            risk.likelihood = likelihood;
        }
        if let Some(impact) = self.impact {
            risk.impact = impact;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn visa_delays() -> Risk {
        Risk {
            id: 1,
            project_id: 1,
            title: "Visa delays".to_string(),
            category: "operational".to_string(),
            likelihood: 3,
            impact: 3,
        }
    }

    #[test]
    fn test_scored_risk_is_flat_on_the_wire() {
        let scored = ScoredRisk::from(visa_delays());
        let value = serde_json::to_value(&scored).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "projectId": 1,
                "title": "Visa delays",
                "category": "operational",
                "likelihood": 3,
                "impact": 3,
                "score": 9
            })
        );
    }

    #[test]
    fn test_update_only_touches_present_fields() {
        let mut risk = visa_delays();
        let update = RiskUpdate {
            impact: Some(5),
            ..Default::default()
        };
        update.apply(&mut risk);

        assert_eq!(risk.title, "Visa delays");
        assert_eq!(risk.likelihood, 3);
        assert_eq!(risk.impact, 5);
        assert_eq!(risk.score(), 15);
    }
}
