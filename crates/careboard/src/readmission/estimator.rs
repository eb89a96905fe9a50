use super::classifier::{assess, RiskPolicy};
use super::domain::{ClinicalInput, PredictionResult};
use super::explanation::explain;
use super::scores::severity_scores;

/// Stateless estimator: severity scores, then the checklist, then the prose.
#[derive(Debug, Clone, Default)]
pub struct ReadmissionEstimator {
    policy: RiskPolicy,
}

impl ReadmissionEstimator {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    pub fn standard() -> Self {
        Self::new(RiskPolicy::standard())
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    pub fn estimate(&self, input: &ClinicalInput) -> PredictionResult {
        let scores = severity_scores(input);
        let assessment = assess(input, &scores, &self.policy);
        let reasoning = explain(&assessment.findings, assessment.will_be_readmitted);

        PredictionResult {
            will_be_readmitted: assessment.will_be_readmitted,
            probability: assessment.probability,
            risk_score: assessment.risk_score,
            risk_factors: assessment.findings,
            scores,
            reasoning,
        }
    }
}
