use chrono::NaiveDate;

use super::domain::{ClinicalInput, Gender};

/// Raised when a raw form value cannot be coerced into its field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormFieldError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("field '{field}' expects a number, got '{value}'")]
    InvalidNumber { field: String, value: String },
    #[error("field '{field}' expects a checkbox value, got '{value}'")]
    InvalidBoolean { field: String, value: String },
    #[error("field '{field}' expects a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { field: String, value: String },
    #[error("field '{field}' does not offer the option '{value}'")]
    InvalidChoice { field: String, value: String },
}

impl ClinicalInput {
    /// Applies one raw form value, coercing it by the field's input type.
    ///
    /// Names are matched case-insensitively with `_` and `-` ignored, so
    /// `icu_duration` and `icuDuration` address the same field.
    pub fn apply_field(&mut self, name: &str, raw: &str) -> Result<(), FormFieldError> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let value = raw.trim();

        match key.as_str() {
            "gender" => self.gender = gender(name, value)?,
            "ethnicity" => self.ethnicity = value.to_string(),
            "admitdate" => self.admit_date = date(name, value)?,
            "dischargedate" => self.discharge_date = date(name, value)?,
            "isfirststay" => self.is_first_stay = checkbox(name, value)?,
            "hospitalexpireflag" => self.hospital_expire_flag = checkbox(name, value)?,
            "age" => self.age = whole_number(name, value)?,
            "icuduration" => self.icu_duration = whole_number(name, value)?,
            "gcseye" => self.gcs_eye = whole_number(name, value)?,
            "gcsverbal" => self.gcs_verbal = whole_number(name, value)?,
            "gcsmotor" => self.gcs_motor = whole_number(name, value)?,
            "elixhauserscore" => self.elixhauser_score = whole_number(name, value)?,
            "heartrate" => self.heart_rate = number(name, value)?,
            "respiratoryrate" => self.respiratory_rate = number(name, value)?,
            "temperature" => self.temperature = number(name, value)?,
            "map" | "meanarterialpressure" => self.mean_arterial_pressure = number(name, value)?,
            "wbccount" => self.wbc_count = number(name, value)?,
            "plateletcount" => self.platelet_count = number(name, value)?,
            "creatinine" => self.creatinine = number(name, value)?,
            "bilirubin" => self.bilirubin = number(name, value)?,
            "bun" => self.bun = number(name, value)?,
            "glucose" => self.glucose = number(name, value)?,
            "pao2fio2" => self.pao2_fio2 = number(name, value)?,
            "urineoutput" => self.urine_output = number(name, value)?,
            "dischargesummary" => {
                self.discharge_summary = Some(value.to_string()).filter(|file| !file.is_empty())
            }
            _ => return Err(FormFieldError::UnknownField(name.to_string())),
        }

        Ok(())
    }
}

// A cleared number input submits "", which the form treats as zero.
fn number(field: &str, value: &str) -> Result<f64, FormFieldError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| FormFieldError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn whole_number(field: &str, value: &str) -> Result<i32, FormFieldError> {
    let parsed = number(field, value)?;
    if parsed.fract() != 0.0 || parsed < f64::from(i32::MIN) || parsed > f64::from(i32::MAX) {
        return Err(FormFieldError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(parsed as i32)
}

fn checkbox(field: &str, value: &str) -> Result<bool, FormFieldError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" | "checked" => Ok(true),
        "false" | "off" | "0" | "no" | "" => Ok(false),
        _ => Err(FormFieldError::InvalidBoolean {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn date(field: &str, value: &str) -> Result<NaiveDate, FormFieldError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| FormFieldError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn gender(field: &str, value: &str) -> Result<Gender, FormFieldError> {
    match value.to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        "other" => Ok(Gender::Other),
        _ => Err(FormFieldError::InvalidChoice {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}
