//! End-to-end readmission scenarios through the public estimator and session facade.

use careboard::readmission::{
    ClinicalInput, Preset, PredictorSession, PredictorView, ReadmissionEstimator, RiskFactor,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

fn scenario(preset: Preset, edit: impl FnOnce(&mut ClinicalInput)) -> ClinicalInput {
    let mut input = preset.input(today());
    edit(&mut input);
    input
}

#[test]
fn scenario_a_elderly_repeat_icu_patient_is_high_risk() {
    let input = scenario(Preset::HighRisk, |input| {
        input.age = 68;
        input.is_first_stay = false;
        input.icu_duration = 7;
        input.creatinine = 1.9;
        input.elixhauser_score = 12;
    });

    let result = ReadmissionEstimator::standard().estimate(&input);

    assert!(result.will_be_readmitted);
    assert_eq!(result.probability, 0.34);
    let fired: Vec<RiskFactor> = result.fired_factors().collect();
    for factor in [
        RiskFactor::AdvancedAge,
        RiskFactor::PriorAdmission,
        RiskFactor::ExtendedIcuStay,
        RiskFactor::ElevatedCreatinine,
    ] {
        assert!(fired.contains(&factor), "{factor:?} should fire");
    }
    assert!(result.reasoning.contains("advanced age"));
}

#[test]
fn scenario_b_young_first_admission_is_low_risk() {
    let input = scenario(Preset::LowRisk, |input| {
        input.age = 37;
        input.is_first_stay = true;
        input.icu_duration = 2;
        input.creatinine = 0.9;
        input.elixhauser_score = 2;
    });

    let result = ReadmissionEstimator::standard().estimate(&input);

    assert!(!result.will_be_readmitted);
    assert_eq!(result.probability, 0.12);
    assert_eq!(result.fired_factors().count(), 0);
    assert!(result.reasoning.contains("first admission"));
}

#[test]
fn scenario_c_three_predicates_is_the_threshold() {
    let input = scenario(Preset::LowRisk, |input| {
        input.age = 70;
        input.is_first_stay = false;
        input.icu_duration = 6;
    });

    let result = ReadmissionEstimator::standard().estimate(&input);

    assert_eq!(result.risk_score, 3);
    assert!(result.will_be_readmitted);
}

#[test]
fn form_session_drives_a_full_submission() {
    let mut session = PredictorSession::new(ReadmissionEstimator::standard(), today());
    session.select_preset(Preset::LowRisk, today());
    for (field, value) in [("age", "70"), ("isFirstStay", "false"), ("icuDuration", "6")] {
        session.update_field(field, value).expect("form accepts edit");
    }

    let headline = session.submit().headline();

    assert_eq!(session.view(), PredictorView::Result);
    assert_eq!(headline, "34% likelihood of readmission");
    let paragraphs = session
        .prediction()
        .map(|result| result.paragraphs().len())
        .unwrap_or_default();
    assert_eq!(paragraphs, 2);
}
