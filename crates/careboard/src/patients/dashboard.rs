use serde::Serialize;

use super::domain::{Diagnostic, DiagnosisHistory, HealthMetric, Patient, PatientProfile};
use super::format::{format_birth_date, month_label};

/// Everything the dashboard page renders, already shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub focus_patient: String,
    pub roster: Vec<RosterEntry>,
    pub profile: Option<ProfileView>,
    pub vitals: VitalsView,
    pub diagnostics: Vec<Diagnostic>,
    pub lab_results: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub profile_picture: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: PatientProfile,
    pub date_of_birth_display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VitalsView {
    pub chart: BloodPressureChart,
    pub blood_pressure: BloodPressureSummary,
    pub cards: Vec<VitalCard>,
}

/// Systolic/diastolic series, oldest reading first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BloodPressureChart {
    pub labels: Vec<String>,
    pub systolic: Vec<f64>,
    pub diastolic: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BloodPressureSummary {
    pub systolic_average: Option<i64>,
    pub systolic_levels: Option<String>,
    pub diastolic_average: Option<i64>,
    pub diastolic_levels: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VitalCard {
    pub title: &'static str,
    pub value: Option<i64>,
    pub levels: Option<String>,
}

impl DashboardView {
    /// Selects the first patient whose name contains `focus_name` and lays out
    /// their sections. A missing patient leaves every section empty.
    pub fn compose(patients: &[Patient], focus_name: &str) -> Self {
        let roster = patients
            .iter()
            .map(|patient| RosterEntry {
                name: patient.name.clone(),
                gender: patient.gender.clone(),
                age: patient.age,
                profile_picture: patient.profile_picture.clone(),
                is_active: patient.name.contains(focus_name),
            })
            .collect();

        let focus = patients
            .iter()
            .find(|patient| patient.name.contains(focus_name));

        let mut view = Self::empty(focus_name);
        view.roster = roster;

        if let Some(patient) = focus {
            view.profile = Some(ProfileView {
                profile: patient.profile(),
                date_of_birth_display: format_birth_date(&patient.date_of_birth),
            });
            view.vitals = VitalsView::from_history(&patient.diagnosis_history);
            view.diagnostics = patient.diagnostic_list.clone();
            view.lab_results = patient.lab_results.clone();
        }

        view
    }

    /// Degraded page for when the patient collection could not be fetched.
    pub fn unavailable(focus_name: &str, reason: impl Into<String>) -> Self {
        let mut view = Self::empty(focus_name);
        view.error = Some(reason.into());
        view
    }

    fn empty(focus_name: &str) -> Self {
        Self {
            focus_patient: focus_name.to_string(),
            roster: Vec::new(),
            profile: None,
            vitals: VitalsView::default(),
            diagnostics: Vec::new(),
            lab_results: Vec::new(),
            error: None,
        }
    }
}

impl VitalsView {
    // History arrives newest first.
    fn from_history(history: &[DiagnosisHistory]) -> Self {
        let chronological: Vec<&DiagnosisHistory> = history.iter().rev().collect();
        let latest = history.first();

        let chart = BloodPressureChart {
            labels: chronological
                .iter()
                .map(|entry| month_label(&entry.month, entry.year))
                .collect(),
            systolic: chronological
                .iter()
                .map(|entry| entry.blood_pressure.systolic.value)
                .collect(),
            diastolic: chronological
                .iter()
                .map(|entry| entry.blood_pressure.diastolic.value)
                .collect(),
        };

        let blood_pressure = BloodPressureSummary {
            systolic_average: floored_average(history, |entry| &entry.blood_pressure.systolic),
            systolic_levels: latest.map(|entry| entry.blood_pressure.systolic.levels.clone()),
            diastolic_average: floored_average(history, |entry| &entry.blood_pressure.diastolic),
            diastolic_levels: latest.map(|entry| entry.blood_pressure.diastolic.levels.clone()),
        };

        let cards = vec![
            vital_card("Respiratory Rate", history, |entry| &entry.respiratory_rate),
            vital_card("Temperature", history, |entry| &entry.temperature),
            vital_card("Heart Rate", history, |entry| &entry.heart_rate),
        ];

        Self {
            chart,
            blood_pressure,
            cards,
        }
    }
}

fn vital_card(
    title: &'static str,
    history: &[DiagnosisHistory],
    metric: impl Fn(&DiagnosisHistory) -> &HealthMetric,
) -> VitalCard {
    VitalCard {
        title,
        value: floored_average(history, &metric),
        levels: history.first().map(|entry| metric(entry).levels.clone()),
    }
}

fn floored_average(
    history: &[DiagnosisHistory],
    metric: impl Fn(&DiagnosisHistory) -> &HealthMetric,
) -> Option<i64> {
    if history.is_empty() {
        return None;
    }
    let total: f64 = history.iter().map(|entry| metric(entry).value).sum();
    Some((total / history.len() as f64).floor() as i64)
}
