use serde::{Deserialize, Serialize};

/// Patient record as served by the external patient collection API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub profile_picture: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub emergency_contact: String,
    pub insurance_type: String,
    #[serde(default)]
    pub diagnosis_history: Vec<DiagnosisHistory>,
    #[serde(default)]
    pub diagnostic_list: Vec<Diagnostic>,
    #[serde(default)]
    pub lab_results: Vec<String>,
}

impl Patient {
    pub fn profile(&self) -> PatientProfile {
        PatientProfile {
            name: self.name.clone(),
            gender: self.gender.clone(),
            age: self.age,
            profile_picture: self.profile_picture.clone(),
            date_of_birth: self.date_of_birth.clone(),
            phone_number: self.phone_number.clone(),
            emergency_contact: self.emergency_contact.clone(),
            insurance_type: self.insurance_type.clone(),
        }
    }
}

/// Scalar fields of a [`Patient`], without the history arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub profile_picture: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub emergency_contact: String,
    pub insurance_type: String,
}

/// One month of recorded vitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisHistory {
    pub month: String,
    pub year: i32,
    pub blood_pressure: BloodPressure,
    pub heart_rate: HealthMetric,
    pub respiratory_rate: HealthMetric,
    pub temperature: HealthMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: HealthMetric,
    pub diastolic: HealthMetric,
}

/// A reading plus the API's qualitative band ("Normal", "Higher than Average").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub value: f64,
    pub levels: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub name: String,
    pub description: String,
    pub status: String,
}
