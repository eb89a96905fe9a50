use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::readmission::{ClinicalInput, Preset, ReadmissionEstimator};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

pub(super) fn estimator() -> ReadmissionEstimator {
    ReadmissionEstimator::standard()
}

pub(super) fn high_risk() -> ClinicalInput {
    Preset::HighRisk.input(today())
}

pub(super) fn low_risk() -> ClinicalInput {
    Preset::LowRisk.input(today())
}

/// Low-risk baseline with exactly three predicates pushed over their cut-offs.
pub(super) fn boundary_patient() -> ClinicalInput {
    let mut input = low_risk();
    input.age = 70;
    input.is_first_stay = false;
    input.icu_duration = 6;
    input
}

/// Every predicate on the checklist fires.
pub(super) fn critical_patient() -> ClinicalInput {
    let mut input = high_risk();
    input.age = 90;
    input.icu_duration = 10;
    input.creatinine = 3.0;
    input.elixhauser_score = 20;
    input
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
