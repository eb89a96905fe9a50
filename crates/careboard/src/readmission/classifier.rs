use serde::{Deserialize, Serialize};

use super::domain::{ClinicalInput, RiskFactor, RiskFactorFinding, SeverityScores};

/// Cut-offs and constants applied by the readmission checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    pub advanced_age_years: i32,
    pub extended_icu_days: i32,
    pub creatinine_mg_dl: f64,
    pub sofa: i32,
    pub saps_ii: i32,
    pub elixhauser: i32,
    /// Minimum number of fired predicates for a positive prediction.
    pub readmission_threshold: u8,
    pub positive_probability: f64,
    pub negative_probability: f64,
}

impl RiskPolicy {
    pub fn standard() -> Self {
        Self {
            advanced_age_years: 65,
            extended_icu_days: 5,
            creatinine_mg_dl: 1.5,
            sofa: 7,
            saps_ii: 30,
            elixhauser: 5,
            readmission_threshold: 3,
            positive_probability: 0.34,
            negative_probability: 0.12,
        }
    }
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) struct RiskAssessment {
    pub findings: Vec<RiskFactorFinding>,
    pub risk_score: u8,
    pub will_be_readmitted: bool,
    pub probability: f64,
}

pub(crate) fn assess(
    input: &ClinicalInput,
    scores: &SeverityScores,
    policy: &RiskPolicy,
) -> RiskAssessment {
    let findings: Vec<RiskFactorFinding> = RiskFactor::ALL
        .iter()
        .map(|factor| RiskFactorFinding {
            factor: *factor,
            label: factor.label().to_string(),
            present: is_present(*factor, input, scores, policy),
        })
        .collect();

    let risk_score = findings.iter().filter(|finding| finding.present).count() as u8;
    let will_be_readmitted = risk_score >= policy.readmission_threshold;
    // Constant per outcome; the score magnitude never moves it.
    let probability = if will_be_readmitted {
        policy.positive_probability
    } else {
        policy.negative_probability
    };

    RiskAssessment {
        findings,
        risk_score,
        will_be_readmitted,
        probability,
    }
}

fn is_present(
    factor: RiskFactor,
    input: &ClinicalInput,
    scores: &SeverityScores,
    policy: &RiskPolicy,
) -> bool {
    match factor {
        RiskFactor::AdvancedAge => input.age > policy.advanced_age_years,
        RiskFactor::PriorAdmission => !input.is_first_stay,
        RiskFactor::ExtendedIcuStay => input.icu_duration > policy.extended_icu_days,
        RiskFactor::ElevatedCreatinine => input.creatinine > policy.creatinine_mg_dl,
        RiskFactor::HighSofa => scores.sofa > policy.sofa,
        RiskFactor::HighSapsII => scores.saps_ii > policy.saps_ii,
        RiskFactor::ComorbidityBurden => scores.elixhauser_sid30 > policy.elixhauser,
    }
}
