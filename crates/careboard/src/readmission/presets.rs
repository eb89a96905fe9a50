use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ClinicalInput, Gender};

/// Canned intake forms offered by the example selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    HighRisk,
    LowRisk,
}

impl Preset {
    pub fn label(&self) -> &'static str {
        match self {
            Preset::HighRisk => "Example 1 – High Risk (68M)",
            Preset::LowRisk => "Example 2 – Low Risk (37F)",
        }
    }

    /// Builds the preset with admission and discharge both set to `today`.
    pub fn input(&self, today: NaiveDate) -> ClinicalInput {
        match self {
            Preset::HighRisk => ClinicalInput {
                gender: Gender::Male,
                age: 68,
                ethnicity: "Caucasian".to_string(),
                admit_date: today,
                discharge_date: today,
                is_first_stay: false,
                hospital_expire_flag: false,
                // sepsis with acute kidney injury
                icu_duration: 7,
                heart_rate: 92.0,
                respiratory_rate: 20.0,
                temperature: 99.1,
                mean_arterial_pressure: 72.0,
                wbc_count: 13.5,
                platelet_count: 180.0,
                creatinine: 1.9,
                bilirubin: 0.9,
                bun: 34.0,
                glucose: 150.0,
                gcs_eye: 4,
                gcs_verbal: 5,
                gcs_motor: 6,
                pao2_fio2: 280.0,
                urine_output: 1300.0,
                elixhauser_score: 12,
                discharge_summary: None,
            },
            Preset::LowRisk => ClinicalInput {
                gender: Gender::Female,
                age: 37,
                ethnicity: "Caucasian".to_string(),
                admit_date: today,
                discharge_date: today,
                is_first_stay: true,
                hospital_expire_flag: false,
                icu_duration: 2,
                heart_rate: 80.0,
                respiratory_rate: 16.0,
                temperature: 98.4,
                mean_arterial_pressure: 80.0,
                wbc_count: 8.0,
                platelet_count: 270.0,
                creatinine: 0.9,
                bilirubin: 0.6,
                bun: 12.0,
                glucose: 100.0,
                gcs_eye: 4,
                gcs_verbal: 5,
                gcs_motor: 6,
                pao2_fio2: 350.0,
                urine_output: 1500.0,
                elixhauser_score: 2,
                discharge_summary: None,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::HighRisk => "high",
            Preset::LowRisk => "low",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset '{0}' (expected 'high' or 'low')")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" | "high_risk" | "high-risk" => Ok(Preset::HighRisk),
            "low" | "low_risk" | "low-risk" => Ok(Preset::LowRisk),
            _ => Err(UnknownPreset(value.to_string())),
        }
    }
}
