use super::domain::{ClinicalInput, SeverityScores};

const SIRS_TEMPERATURE_LOW_F: f64 = 96.8;
const SIRS_TEMPERATURE_HIGH_F: f64 = 100.4;

pub(crate) fn severity_scores(input: &ClinicalInput) -> SeverityScores {
    let age = f64::from(input.age);

    SeverityScores {
        sofa: floor(1.0 + age / 20.0 + input.creatinine * 2.0),
        saps_ii: floor(10.0 + age / 10.0 + f64::from(input.icu_duration) * 2.0),
        aps_iii: floor(20.0 + age / 5.0 + input.bun / 2.0),
        mlods: floor(input.creatinine + input.bilirubin / 2.0),
        sirs: sirs(input.temperature),
        elixhauser_sid30: input.elixhauser_score,
    }
}

fn sirs(temperature: f64) -> i32 {
    if !(SIRS_TEMPERATURE_LOW_F..=SIRS_TEMPERATURE_HIGH_F).contains(&temperature) {
        2
    } else {
        1
    }
}

// Saturating cast; NaN lands on 0.
fn floor(value: f64) -> i32 {
    value.floor() as i32
}
