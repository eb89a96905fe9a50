//! Patient roster and dashboard composition over the external patient collection.

pub mod client;
pub mod dashboard;
pub mod domain;
pub mod format;
pub mod router;

pub use client::{
    ConfiguredPatientSource, PatientApiClient, PatientFetchError, PatientSource,
    SamplePatientSource,
};
pub use dashboard::{DashboardView, RosterEntry, VitalCard};
pub use domain::{BloodPressure, Diagnostic, DiagnosisHistory, HealthMetric, Patient, PatientProfile};
pub use router::patients_router;
