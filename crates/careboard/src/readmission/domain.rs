use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Administrative gender captured on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Everything a clinician supplies for one readmission estimate.
///
/// Ranges are documented but not enforced: out-of-range values flow straight
/// into the severity scores and risk predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    pub gender: Gender,
    pub age: i32,
    pub ethnicity: String,
    pub admit_date: NaiveDate,
    pub discharge_date: NaiveDate,
    pub is_first_stay: bool,
    pub hospital_expire_flag: bool,
    /// Days spent in the ICU.
    pub icu_duration: i32,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    pub mean_arterial_pressure: f64,
    pub wbc_count: f64,
    pub platelet_count: f64,
    pub creatinine: f64,
    pub bilirubin: f64,
    pub bun: f64,
    pub glucose: f64,
    /// Glasgow Coma Scale eye response, 1-4.
    pub gcs_eye: i32,
    /// Glasgow Coma Scale verbal response, 1-5.
    pub gcs_verbal: i32,
    /// Glasgow Coma Scale motor response, 1-6.
    pub gcs_motor: i32,
    pub pao2_fio2: f64,
    /// mL/day.
    pub urine_output: f64,
    pub elixhauser_score: i32,
    /// File name of an uploaded discharge summary. Never read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_summary: Option<String>,
}

/// Severity indices derived from a [`ClinicalInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityScores {
    pub sofa: i32,
    pub saps_ii: i32,
    pub aps_iii: i32,
    pub mlods: i32,
    pub sirs: i32,
    pub elixhauser_sid30: i32,
}

/// Estimator output for a single submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub will_be_readmitted: bool,
    pub probability: f64,
    pub risk_score: u8,
    pub risk_factors: Vec<RiskFactorFinding>,
    pub scores: SeverityScores,
    pub reasoning: String,
}

impl PredictionResult {
    /// Probability as a whole percentage, the way the result view prints it.
    pub fn likelihood_percent(&self) -> u8 {
        (self.probability * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn headline(&self) -> String {
        format!("{}% likelihood of readmission", self.likelihood_percent())
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        self.reasoning
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }

    pub fn fired_factors(&self) -> impl Iterator<Item = RiskFactor> + '_ {
        self.risk_factors
            .iter()
            .filter(|finding| finding.present)
            .map(|finding| finding.factor)
    }
}

/// Checklist entries evaluated by the classifier, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    AdvancedAge,
    PriorAdmission,
    ExtendedIcuStay,
    ElevatedCreatinine,
    HighSofa,
    #[serde(rename = "high_saps_ii")]
    HighSapsII,
    ComorbidityBurden,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 7] = [
        RiskFactor::AdvancedAge,
        RiskFactor::PriorAdmission,
        RiskFactor::ExtendedIcuStay,
        RiskFactor::ElevatedCreatinine,
        RiskFactor::HighSofa,
        RiskFactor::HighSapsII,
        RiskFactor::ComorbidityBurden,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::AdvancedAge => "Age over threshold",
            RiskFactor::PriorAdmission => "Prior hospital stay",
            RiskFactor::ExtendedIcuStay => "Extended ICU stay",
            RiskFactor::ElevatedCreatinine => "Elevated creatinine",
            RiskFactor::HighSofa => "High SOFA score",
            RiskFactor::HighSapsII => "High SAPS-II score",
            RiskFactor::ComorbidityBurden => "Elixhauser comorbidity burden",
        }
    }
}

/// One line of the audit trail: which predicate and whether it fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactorFinding {
    pub factor: RiskFactor,
    pub label: String,
    pub present: bool,
}
