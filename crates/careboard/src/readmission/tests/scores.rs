use super::common::*;
use crate::readmission::scores::severity_scores;
use crate::readmission::SeverityScores;

#[test]
fn high_risk_example_scores() {
    let scores = severity_scores(&high_risk());

    assert_eq!(
        scores,
        SeverityScores {
            sofa: 8,
            saps_ii: 30,
            aps_iii: 50,
            mlods: 2,
            sirs: 1,
            elixhauser_sid30: 12,
        }
    );
}

#[test]
fn low_risk_example_scores() {
    let scores = severity_scores(&low_risk());

    assert_eq!(
        scores,
        SeverityScores {
            sofa: 4,
            saps_ii: 17,
            aps_iii: 33,
            mlods: 1,
            sirs: 1,
            elixhauser_sid30: 2,
        }
    );
}

#[test]
fn sirs_flags_temperatures_outside_the_normal_band() {
    let mut input = low_risk();
    for (temperature, expected) in [
        (96.7, 2),
        (96.8, 1),
        (98.6, 1),
        (100.4, 1),
        (100.5, 2),
        (104.0, 2),
    ] {
        input.temperature = temperature;
        assert_eq!(
            severity_scores(&input).sirs,
            expected,
            "temperature {temperature}"
        );
    }
}

#[test]
fn sofa_never_decreases_with_age() {
    let mut input = low_risk();
    let mut previous = i32::MIN;
    for age in 0..=110 {
        input.age = age;
        let sofa = severity_scores(&input).sofa;
        assert!(sofa >= previous, "sofa dropped at age {age}");
        previous = sofa;
    }
}

#[test]
fn sofa_never_decreases_with_creatinine() {
    let mut input = high_risk();
    let mut previous = i32::MIN;
    for step in 0..=80 {
        input.creatinine = f64::from(step) * 0.1;
        let sofa = severity_scores(&input).sofa;
        assert!(sofa >= previous, "sofa dropped at creatinine {}", input.creatinine);
        previous = sofa;
    }
}

#[test]
fn elixhauser_passes_through_unchanged() {
    let mut input = low_risk();
    input.elixhauser_score = 31;
    assert_eq!(severity_scores(&input).elixhauser_sid30, 31);
}

#[test]
fn out_of_range_values_flow_into_scores() {
    let mut input = low_risk();
    input.age = -40;
    input.gcs_eye = 9;
    input.creatinine = -1.0;

    let scores = severity_scores(&input);

    // 1 - 2 - 2 = -3
    assert_eq!(scores.sofa, -3);
    assert_eq!(scores.mlods, -1);
}
