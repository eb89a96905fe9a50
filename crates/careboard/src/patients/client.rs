use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::domain::Patient;
use crate::config::{DashboardConfig, PatientApiConfig};

const SAMPLE_PATIENTS: &str = include_str!("../../data/sample_patients.json");

/// Failure fetching the patient collection. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum PatientFetchError {
    #[error("error fetching patient API data: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("patient API unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("patient API returned an unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can hand the dashboard the full patient collection.
pub trait PatientSource: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Patient>, PatientFetchError>> + Send;
}

/// Basic-auth client for the external patient collection endpoint.
#[derive(Debug, Clone)]
pub struct PatientApiClient {
    http: reqwest::Client,
    config: PatientApiConfig,
}

impl PatientApiClient {
    pub fn new(config: PatientApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: PatientApiConfig) -> Self {
        Self { http, config }
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

impl PatientSource for PatientApiClient {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Patient>, PatientFetchError>> + Send {
        async move {
            debug!(url = %self.config.url, "fetching patient collection");
            let response = self
                .http
                .get(&self.config.url)
                .basic_auth(&self.config.username, Some(&self.config.password))
                .header(CONTENT_TYPE, "application/json")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(PatientFetchError::Status {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("unknown").to_string(),
                });
            }

            let body = response.bytes().await?;
            let patients: Vec<Patient> = serde_json::from_slice(&body)?;
            debug!(count = patients.len(), "patient collection received");
            Ok(patients)
        }
    }
}

/// Bundled demo roster served when no patient API is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePatientSource;

impl SamplePatientSource {
    pub fn patients(&self) -> Result<Vec<Patient>, PatientFetchError> {
        Ok(serde_json::from_str(SAMPLE_PATIENTS)?)
    }
}

impl PatientSource for SamplePatientSource {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Patient>, PatientFetchError>> + Send {
        let patients = self.patients();
        async move { patients }
    }
}

/// Source chosen from configuration at start-up.
#[derive(Debug, Clone)]
pub enum ConfiguredPatientSource {
    Api(PatientApiClient),
    Sample(SamplePatientSource),
}

impl ConfiguredPatientSource {
    pub fn from_config(config: &DashboardConfig) -> Self {
        match &config.patient_api {
            Some(api) => Self::Api(PatientApiClient::new(api.clone())),
            None => Self::Sample(SamplePatientSource),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Api(client) => format!("patient API at {}", client.url()),
            Self::Sample(_) => "bundled sample roster".to_string(),
        }
    }
}

impl PatientSource for ConfiguredPatientSource {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Patient>, PatientFetchError>> + Send {
        async move {
            match self {
                Self::Api(client) => client.fetch_all().await,
                Self::Sample(sample) => sample.fetch_all().await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster_parses() {
        let patients = SamplePatientSource.patients().expect("bundled json is valid");
        assert_eq!(patients.len(), 6);
        assert!(patients
            .iter()
            .any(|patient| patient.name == "Jessica Taylor" && patient.diagnosis_history.len() == 6));
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let patients = SamplePatientSource.patients().expect("bundled json is valid");
        let emily = patients
            .iter()
            .find(|patient| patient.name == "Emily Williams")
            .expect("emily present");
        assert!(emily.diagnosis_history.is_empty());
        assert!(emily.lab_results.is_empty());
    }

    #[test]
    fn configuration_selects_the_source() {
        let sample = ConfiguredPatientSource::from_config(&DashboardConfig {
            patient_api: None,
            focus_patient: "Jessica Taylor".to_string(),
        });
        assert!(matches!(sample, ConfiguredPatientSource::Sample(_)));

        let api = ConfiguredPatientSource::from_config(&DashboardConfig {
            patient_api: Some(PatientApiConfig {
                url: "http://127.0.0.1:9/patients".to_string(),
                username: "user".to_string(),
                password: "secret".to_string(),
            }),
            focus_patient: "Jessica Taylor".to_string(),
        });
        assert_eq!(api.describe(), "patient API at http://127.0.0.1:9/patients");
    }
}
